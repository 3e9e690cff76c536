//! Book error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    /// The marketplace acknowledged the request but declined to serve
    /// it. Carries the upstream message verbatim.
    #[error("{message}")]
    Rejected { message: String },

    /// The request succeeded but no matching advertisements exist.
    #[error("Offers not found.")]
    NoOffers,

    /// Best price requested from an empty offer list. A caller contract
    /// violation -- the parser never produces an empty list.
    #[error("Empty offer list")]
    EmptyBook,

    /// An advertisement record carried an unusable field.
    #[error("Invalid advertisement record: {0}")]
    InvalidRecord(String),

    /// The response text is not a well-formed marketplace document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;
