//! Validated conversion requests.

use p2pfx_core::{Amount, Currency, TradeType};

use crate::error::{PlanError, PlanResult};

/// Which side of the conversion carries the known amount.
///
/// Exactly one amount is ever filled; this enum makes "neither" and
/// "both" unrepresentable, so the planner can never divide by a missing
/// amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilledSide {
    /// The user fixed how much they send.
    Source(Amount),
    /// The user fixed how much they receive.
    Destination(Amount),
}

impl FilledSide {
    pub fn amount(&self) -> Amount {
        match self {
            Self::Source(amount) | Self::Destination(amount) => *amount,
        }
    }

    pub fn is_destination(&self) -> bool {
        matches!(self, Self::Destination(_))
    }
}

/// One validated conversion request.
///
/// Expressed in filled/other terms: the filled currency is the one
/// whose amount is known, regardless of whether it is semantically the
/// send or receive side.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub filled_currency: Currency,
    pub other_currency: Currency,
    /// Payment-method short name for the filled currency, if selected.
    pub filled_payment_method: Option<String>,
    /// Payment-method short name for the other currency, if selected.
    pub other_payment_method: Option<String>,
    /// Restrict all queries to certified merchants.
    pub merchant_only: bool,
    pub filled: FilledSide,
}

impl ConversionRequest {
    /// Validate and build a request.
    ///
    /// Rejects a non-positive amount and identical currencies; both are
    /// request-boundary conditions, never runtime arithmetic faults.
    pub fn new(
        filled_currency: Currency,
        other_currency: Currency,
        filled_payment_method: Option<String>,
        other_payment_method: Option<String>,
        merchant_only: bool,
        filled: FilledSide,
    ) -> PlanResult<Self> {
        if !filled.amount().is_positive() {
            return Err(PlanError::InvalidRequest(
                "Amount should be greater than zero".to_string(),
            ));
        }
        if filled_currency.code == other_currency.code {
            return Err(PlanError::InvalidRequest(
                "From and to currencies cannot be the same".to_string(),
            ));
        }

        Ok(Self {
            filled_currency,
            other_currency,
            filled_payment_method,
            other_payment_method,
            merchant_only,
            filled,
        })
    }

    /// Trade direction for the filled currency's query.
    ///
    /// When the destination amount is filled, acquiring that currency
    /// means selling the asset for it, so the filled side trades Sell;
    /// when the source amount is filled, the filled side trades Buy.
    pub fn filled_direction(&self) -> TradeType {
        if self.filled.is_destination() {
            TradeType::Sell
        } else {
            TradeType::Buy
        }
    }

    /// Trade direction for the other currency's queries.
    pub fn other_direction(&self) -> TradeType {
        self.filled_direction().opposite()
    }
}
