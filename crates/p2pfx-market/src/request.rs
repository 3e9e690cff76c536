//! Query parameters and the wire payload for the advertisement search.

use p2pfx_core::{Amount, TradeType};
use serde::Serialize;

/// One advertisement-book query, as the planner expresses it.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferQuery {
    /// Fiat currency code, e.g. "RUB".
    pub fiat: String,
    /// Restrict results to certified merchants.
    pub merchant_only: bool,
    /// Marketplace payment-method identifier, if one is selected.
    pub payment_method: Option<String>,
    /// Transaction amount in fiat. `None` means unspecified -- a probe
    /// for the approximate market price. Zero is a valid, distinct
    /// amount and is never substituted for "unspecified".
    pub amount: Option<Amount>,
    /// Trade direction.
    pub trade_type: TradeType,
    /// Number of advertisements to request.
    pub rows: u32,
}

/// JSON body POSTed to the marketplace search endpoint.
///
/// Field names and shape follow the marketplace API: `payTypes` is an
/// empty list rather than null when no method is selected, and both
/// `publisherType` and `transAmount` are serialized as explicit nulls
/// when absent.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub page: u32,
    pub rows: u32,
    #[serde(rename = "payTypes")]
    pub pay_types: Vec<&'a str>,
    pub countries: Vec<&'a str>,
    #[serde(rename = "publisherType")]
    pub publisher_type: Option<&'a str>,
    #[serde(rename = "transAmount")]
    pub trans_amount: Option<Amount>,
    pub asset: &'a str,
    pub fiat: &'a str,
    #[serde(rename = "tradeType")]
    pub trade_type: TradeType,
}

impl<'a> SearchRequest<'a> {
    /// Build the wire payload for a query.
    pub fn from_query(query: &'a OfferQuery, asset: &'a str, page: u32) -> Self {
        Self {
            page,
            rows: query.rows,
            pay_types: query
                .payment_method
                .as_deref()
                .map(|m| vec![m])
                .unwrap_or_default(),
            countries: Vec::new(),
            publisher_type: query.merchant_only.then_some("merchant"),
            trans_amount: query.amount,
            asset,
            fiat: &query.fiat,
            trade_type: query.trade_type,
        }
    }
}
