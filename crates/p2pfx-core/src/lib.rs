//! Core domain types for the p2pfx conversion estimator.
//!
//! This crate provides the fundamental types used throughout the system:
//! - `Price`, `Amount`: precision-safe numeric types
//! - `TradeType`: trade direction against the stable asset
//! - `Currency`, `PaymentMethod`: reference data records
//! - `Offer`, `Advertiser`: one parsed marketplace advertisement

pub mod currency;
pub mod decimal;
pub mod error;
pub mod offer;
pub mod trade;

pub use currency::{Currency, PaymentMethod};
pub use decimal::{Amount, Price};
pub use error::{CoreError, Result};
pub use offer::{Advertiser, Offer};
pub use trade::TradeType;
