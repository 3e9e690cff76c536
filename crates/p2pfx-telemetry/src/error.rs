//! Telemetry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Logging setup error: {0}")]
    Setup(String),
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
