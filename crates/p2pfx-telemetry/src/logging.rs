//! Structured logging initialization.

use crate::error::{TelemetryError, TelemetryResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging for the converter.
///
/// Log lines go to stderr so the rendered quote on stdout stays clean
/// for piping. `RUST_LOG` overrides the default filter; setting
/// `P2PFX_LOG_JSON=1` switches to JSON lines for log collection.
pub fn init_logging() -> TelemetryResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,p2pfx=debug"));

    let json = std::env::var("P2PFX_LOG_JSON")
        .map(|v| v == "1")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError::Setup(e.to_string()))
}
