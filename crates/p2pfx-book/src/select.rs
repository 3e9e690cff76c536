//! Best-price selection over a sorted offer list.

use p2pfx_core::{Offer, Price};

use crate::error::{BookError, BookResult};

/// Best price of an already-sorted offer list.
///
/// The list must carry the parser's ordering, which puts the best price
/// for the requested direction at index 0. An empty list is a contract
/// violation -- the parser reports `NoOffers` before one can exist.
pub fn best_price(offers: &[Offer]) -> BookResult<Price> {
    offers
        .first()
        .map(|offer| offer.price)
        .ok_or(BookError::EmptyBook)
}
