//! Registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    #[error("Payment method not found: {0}")]
    PaymentMethodNotFound(u32),

    #[error("Book error: {0}")]
    Book(#[from] p2pfx_book::BookError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
