//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Marketplace error: {0}")]
    Market(#[from] p2pfx_market::MarketError),

    #[error("Registry error: {0}")]
    Registry(#[from] p2pfx_registry::RegistryError),

    #[error("Planning error: {0}")]
    Plan(#[from] p2pfx_planner::PlanError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] p2pfx_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
