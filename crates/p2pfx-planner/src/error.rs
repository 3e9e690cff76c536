//! Planner error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// The request failed validation before any query was issued.
    #[error("Invalid conversion request: {0}")]
    InvalidRequest(String),

    /// A marketplace query failed at the transport level.
    #[error("Marketplace error: {0}")]
    Market(#[from] p2pfx_market::MarketError),

    /// A response could not be turned into a usable offer list.
    #[error("Book error: {0}")]
    Book(#[from] p2pfx_book::BookError),

    /// A best price of zero reached rate derivation. Defensive: the
    /// parser rejects non-positive prices.
    #[error("Zero price in {0}")]
    ZeroPrice(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
