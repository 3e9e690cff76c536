//! One parsed marketplace advertisement.

use serde::{Deserialize, Serialize};

use crate::decimal::{Amount, Price};
use crate::trade::TradeType;

/// Advertiser metadata attached to an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertiser {
    /// Display nickname.
    pub name: String,
    /// Whether the advertiser is a marketplace-certified merchant.
    pub is_merchant: bool,
    /// Rolling completion rate as a 0-100 percentage.
    pub month_finish_rate: f64,
    /// Rolling order count.
    pub month_orders_count: u32,
    /// Opaque marketplace user identifier.
    pub user_id: String,
}

/// Offer to trade the stable asset against one fiat currency.
///
/// Constructed fresh from each parse call, immutable, never persisted;
/// it lives only for the duration of one planning step. Within one
/// parsed batch all offers share the requested trade direction, and
/// `price` is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Fiat currency code this offer is denominated in.
    pub fiat: String,
    /// Advertiser who posted the offer.
    pub advertiser: Advertiser,
    /// Trade direction.
    pub trade_type: TradeType,
    /// Unit price: fiat per unit of the stable asset.
    pub price: Price,
    /// Minimum transaction amount in fiat.
    pub min_amount: Amount,
    /// Remaining tradable liquidity in asset units.
    pub tradable_funds: Amount,
    /// Marketplace-assigned advertisement identifier.
    pub offer_id: String,
}
