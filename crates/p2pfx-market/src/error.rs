//! Marketplace client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    /// The marketplace endpoint could not be reached at all.
    #[error("Marketplace unreachable: {0}")]
    TransportUnavailable(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

pub type MarketResult<T> = Result<T, MarketError>;
