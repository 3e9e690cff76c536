//! The two-hop conversion planner.

use p2pfx_book::{best_price, parse_offers};
use p2pfx_core::{Amount, Offer, TradeType};
use p2pfx_market::{OfferQuery, OfferSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::error::PlanResult;
use crate::quote::ConversionQuote;
use crate::request::ConversionRequest;

/// Planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Rows for the probe request. One row is enough: the probe only
    /// estimates the market price before the trade size is known.
    #[serde(default = "default_probe_rows")]
    pub probe_rows: u32,
    /// Rows for full requests, sized to capture a realistic best price
    /// under real liquidity.
    #[serde(default = "default_full_rows")]
    pub full_rows: u32,
}

fn default_probe_rows() -> u32 {
    1
}

fn default_full_rows() -> u32 {
    10
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            probe_rows: default_probe_rows(),
            full_rows: default_full_rows(),
        }
    }
}

/// Plans one conversion as three sequential marketplace queries.
///
/// The queries cannot overlap: the probe's result sizes the final
/// request, so each step needs the previous one. The first failure
/// aborts the chain; nothing is retried or cached.
pub struct ConversionPlanner {
    source: Arc<dyn OfferSource>,
    config: PlannerConfig,
}

impl ConversionPlanner {
    pub fn new(source: Arc<dyn OfferSource>) -> Self {
        Self::with_config(source, PlannerConfig::default())
    }

    pub fn with_config(source: Arc<dyn OfferSource>, config: PlannerConfig) -> Self {
        Self { source, config }
    }

    /// Fetch the two ranked offer books for a conversion.
    ///
    /// Returns `(other-currency offers, filled-currency offers)`; the
    /// tuple order is fixed and callers depend on it positionally.
    pub async fn plan_offers(
        &self,
        request: &ConversionRequest,
    ) -> PlanResult<(Vec<Offer>, Vec<Offer>)> {
        let filled_amount = request.filled.amount();

        // Full request for the known side: realistic best price at the
        // actual trade size.
        let filled_offers = self
            .query(
                request,
                &request.filled_currency.code,
                request.filled_payment_method.as_deref(),
                Some(filled_amount),
                request.filled_direction(),
                self.config.full_rows,
            )
            .await?;
        let filled_price = best_price(&filled_offers)?;

        let asset_qty = filled_amount
            .asset_units(filled_price)
            .ok_or_else(|| crate::error::PlanError::ZeroPrice("filled book".to_string()))?;

        // Probe for the other side: the achievable price depends on the
        // trade size, which is not known yet, so ask for a single row
        // with the amount left unspecified.
        let probe_offers = self
            .query(
                request,
                &request.other_currency.code,
                request.other_payment_method.as_deref(),
                None,
                request.other_direction(),
                self.config.probe_rows,
            )
            .await?;
        let probe_price = best_price(&probe_offers)?;

        let estimated_other = probe_price.amount_for(asset_qty);

        debug!(
            filled = %request.filled_currency.code,
            other = %request.other_currency.code,
            filled_price = %filled_price,
            asset_qty = %asset_qty,
            probe_price = %probe_price,
            estimated_other = %estimated_other,
            "Sized final request from probe"
        );

        // Full request for the other side at the estimated size. The
        // probe's one-row price is not reliable enough for the final
        // rate, so this request cannot be skipped.
        let other_offers = self
            .query(
                request,
                &request.other_currency.code,
                request.other_payment_method.as_deref(),
                Some(estimated_other),
                request.other_direction(),
                self.config.full_rows,
            )
            .await?;

        Ok((other_offers, filled_offers))
    }

    /// Plan and derive the final quote.
    pub async fn quote(&self, request: &ConversionRequest) -> PlanResult<ConversionQuote> {
        let (other_offers, filled_offers) = self.plan_offers(request).await?;
        ConversionQuote::derive(request, other_offers, filled_offers)
    }

    async fn query(
        &self,
        request: &ConversionRequest,
        fiat: &str,
        payment_method: Option<&str>,
        amount: Option<Amount>,
        trade_type: TradeType,
        rows: u32,
    ) -> PlanResult<Vec<Offer>> {
        let query = OfferQuery {
            fiat: fiat.to_string(),
            merchant_only: request.merchant_only,
            payment_method: payment_method.map(String::from),
            amount,
            trade_type,
            rows,
        };
        let raw = self.source.fetch_offers(&query).await?;
        Ok(parse_offers(&raw, trade_type)?)
    }
}
