//! Final quote derivation -- the thin arithmetic wrapper over the
//! planned offer books.

use p2pfx_book::best_price;
use p2pfx_core::{Amount, Currency, Offer, Price};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};
use crate::request::{ConversionRequest, FilledSide};

/// The observable result of one conversion request.
///
/// `rate` is filled-currency units per other-currency unit, derived
/// from the best prices of the two full requests only -- the probe
/// price never reaches this calculation.
#[derive(Debug, Clone)]
pub struct ConversionQuote {
    /// Identifier for tracing one request through the logs.
    pub quote_id: Uuid,
    pub filled_currency: Currency,
    pub other_currency: Currency,
    pub filled: FilledSide,
    /// Best price of the filled currency's book.
    pub filled_price: Price,
    /// Best price of the other currency's book.
    pub other_price: Price,
    /// Conversion rate: filled fiat per unit of other fiat.
    pub rate: Decimal,
    /// The amount the user fixed.
    pub filled_amount: Amount,
    /// The derived amount of the other currency.
    pub converted_amount: Amount,
    /// Ranked offer book for the other currency.
    pub other_offers: Vec<Offer>,
    /// Ranked offer book for the filled currency.
    pub filled_offers: Vec<Offer>,
}

impl ConversionQuote {
    /// Derive the quote from the two planned offer books.
    pub fn derive(
        request: &ConversionRequest,
        other_offers: Vec<Offer>,
        filled_offers: Vec<Offer>,
    ) -> PlanResult<Self> {
        let filled_price = best_price(&filled_offers)?;
        let other_price = best_price(&other_offers)?;

        let rate = filled_price
            .ratio_to(other_price)
            .ok_or_else(|| PlanError::ZeroPrice("other book".to_string()))?;
        if rate.is_zero() {
            return Err(PlanError::ZeroPrice("filled book".to_string()));
        }

        let filled_amount = request.filled.amount();
        let converted_amount = filled_amount / rate;

        let quote = Self {
            quote_id: Uuid::new_v4(),
            filled_currency: request.filled_currency.clone(),
            other_currency: request.other_currency.clone(),
            filled: request.filled,
            filled_price,
            other_price,
            rate,
            filled_amount,
            converted_amount,
            other_offers,
            filled_offers,
        };

        info!(
            quote_id = %quote.quote_id,
            filled = %quote.filled_currency.code,
            other = %quote.other_currency.code,
            rate = %quote.rate,
            filled_amount = %quote.filled_amount,
            converted_amount = %quote.converted_amount,
            "Derived conversion quote"
        );

        Ok(quote)
    }
}
