//! Advertisement-book parsing and best-price selection.
//!
//! Turns raw marketplace response text into validated, sorted offer
//! lists and extracts payment-method listings from the same response
//! shape. "Best price" always means index 0 after the direction sort.

pub mod error;
pub mod parser;
pub mod select;

pub use error::{BookError, BookResult};
pub use parser::{parse_offers, parse_payment_methods, MethodListing};
pub use select::best_price;
