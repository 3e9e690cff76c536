//! Application wiring: store, marketplace client and planner.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use p2pfx_book::BookError;
use p2pfx_core::{Amount, PaymentMethod};
use p2pfx_market::{HttpMarketplace, OfferQuery, OfferSource};
use p2pfx_planner::{ConversionPlanner, ConversionQuote, ConversionRequest, FilledSide, PlanError};
use p2pfx_registry::{register_payment_methods, ReferenceStore};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

/// Rows requested when discovering payment methods for a currency.
const METHOD_DISCOVERY_ROWS: u32 = 20;

/// One conversion as the user expressed it: source and destination
/// currencies with exactly one amount filled.
#[derive(Debug, Clone)]
pub struct ConversionArgs {
    pub from: String,
    pub to: String,
    /// Amount of the source currency to send.
    pub send: Option<Decimal>,
    /// Amount of the destination currency to receive.
    pub receive: Option<Decimal>,
    pub from_method: Option<String>,
    pub to_method: Option<String>,
    pub merchant_only: bool,
}

/// Main application.
pub struct Application {
    config: AppConfig,
    store: ReferenceStore,
    source: Arc<dyn OfferSource>,
}

impl Application {
    /// Create an application with the live marketplace client.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let source = Arc::new(HttpMarketplace::new(config.market.clone())?);
        Ok(Self::with_source(config, source))
    }

    /// Create an application with an injected offer source.
    pub fn with_source(config: AppConfig, source: Arc<dyn OfferSource>) -> Self {
        let store = ReferenceStore::new();
        for currency in &config.currencies {
            store.add_currency(currency.code.clone(), currency.name.clone());
        }
        Self {
            config,
            store,
            source,
        }
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    /// Run one conversion.
    pub async fn convert(&self, args: &ConversionArgs) -> AppResult<ConversionQuote> {
        let from = self.store.resolve_currency_by_code(&args.from)?;
        let to = self.store.resolve_currency_by_code(&args.to)?;

        // The planner works in filled/other terms: the filled currency
        // is whichever side the user fixed the amount for.
        let (filled_currency, other_currency, filled_method, other_method, filled) =
            match (args.send, args.receive) {
                (Some(amount), None) => (
                    from,
                    to,
                    args.from_method.clone(),
                    args.to_method.clone(),
                    FilledSide::Source(Amount::new(amount)),
                ),
                (None, Some(amount)) => (
                    to,
                    from,
                    args.to_method.clone(),
                    args.from_method.clone(),
                    FilledSide::Destination(Amount::new(amount)),
                ),
                _ => {
                    return Err(AppError::InvalidArgs(
                        "Fill exactly one of send and receive".to_string(),
                    ))
                }
            };

        info!(
            from = %args.from,
            to = %args.to,
            filled = %filled_currency.code,
            merchant_only = args.merchant_only,
            "Planning conversion"
        );

        let request = ConversionRequest::new(
            filled_currency,
            other_currency,
            filled_method,
            other_method,
            args.merchant_only,
            filled,
        )?;

        let planner =
            ConversionPlanner::with_config(self.source.clone(), self.config.planner.clone());
        Ok(planner.quote(&request).await?)
    }

    /// Discover and register the payment methods for a currency.
    pub async fn discover_methods(&self, code: &str) -> AppResult<Vec<PaymentMethod>> {
        let currency = self.store.resolve_currency_by_code(code)?;

        let query = OfferQuery {
            fiat: currency.code.clone(),
            merchant_only: false,
            payment_method: None,
            amount: None,
            trade_type: p2pfx_core::TradeType::Buy,
            rows: METHOD_DISCOVERY_ROWS,
        };
        let raw = self.source.fetch_offers(&query).await?;

        Ok(register_payment_methods(&self.store, &raw)?)
    }
}

/// Map an error to the single user-visible message for the request
/// boundary. Liquidity gaps read differently from transport faults so
/// the user knows whether to retry or change their selection.
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::Plan(PlanError::Book(BookError::NoOffers)) => {
            "No matching offers found. Change your selection and try again.".to_string()
        }
        AppError::Plan(PlanError::Book(BookError::Rejected { message })) => {
            format!("The marketplace declined the request: {message}")
        }
        AppError::Plan(PlanError::Market(_)) | AppError::Market(_) => {
            "The marketplace is unreachable. Try again later.".to_string()
        }
        AppError::Registry(p2pfx_registry::RegistryError::Book(BookError::NoOffers)) => {
            "Payment methods for the selected currency do not exist.".to_string()
        }
        other => other.to_string(),
    }
}
