//! Marketplace client boundary.
//!
//! The rest of the system consumes raw response text through the
//! [`OfferSource`] trait; production wires in the reqwest-backed
//! [`HttpMarketplace`], tests wire in a scripted implementation.
//! Marketplace-level declines are not detected here -- they only
//! surface in the response body, which the book parser inspects.

pub mod client;
pub mod error;
pub mod request;

#[cfg(any(test, feature = "test-utils"))]
pub mod scripted;

pub use client::{HttpMarketplace, MarketConfig, OfferSource};
pub use error::{MarketError, MarketResult};
pub use request::{OfferQuery, SearchRequest};

#[cfg(any(test, feature = "test-utils"))]
pub use scripted::ScriptedSource;
