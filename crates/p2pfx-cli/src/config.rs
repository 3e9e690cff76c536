//! Application configuration.

use crate::error::{AppError, AppResult};
use p2pfx_market::MarketConfig;
use p2pfx_planner::PlannerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One seeded currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code as the marketplace knows it, e.g. "RUB".
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Marketplace client configuration.
    #[serde(default)]
    pub market: MarketConfig,
    /// Planner configuration.
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Currencies available for conversion.
    #[serde(default = "default_currencies")]
    pub currencies: Vec<CurrencyConfig>,
}

fn default_currencies() -> Vec<CurrencyConfig> {
    [
        ("RUB", "Russian Ruble"),
        ("TRY", "Turkish Lira"),
        ("KZT", "Kazakhstani Tenge"),
        ("UAH", "Ukrainian Hryvnia"),
        ("AED", "UAE Dirham"),
    ]
    .into_iter()
    .map(|(code, name)| CurrencyConfig {
        code: code.to_string(),
        name: name.to_string(),
    })
    .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            market: MarketConfig::default(),
            planner: PlannerConfig::default(),
            currencies: default_currencies(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to defaults when the file is
    /// missing. The path comes from the CLI flag, then `P2PFX_CONFIG`,
    /// then `config/default.toml`.
    pub fn load(cli_path: Option<&str>) -> AppResult<Self> {
        let path = cli_path
            .map(String::from)
            .or_else(|| std::env::var("P2PFX_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if Path::new(&path).exists() {
            Self::from_file(&path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
