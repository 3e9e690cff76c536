//! HTTP client for the marketplace advertisement search endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{MarketError, MarketResult};
use crate::request::{OfferQuery, SearchRequest};

/// Source of raw advertisement-book responses.
///
/// Returns the response body verbatim; whether the marketplace actually
/// served the request is only visible in that body's success flag, which
/// the parser inspects. Implementations raise [`MarketError`] solely for
/// transport-level failures.
#[async_trait]
pub trait OfferSource: Send + Sync {
    async fn fetch_offers(&self, query: &OfferQuery) -> MarketResult<String>;
}

/// Marketplace client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Advertisement search endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Stable asset all conversions are routed through.
    #[serde(default = "default_asset")]
    pub asset: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Result page to request.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_endpoint() -> String {
    "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c/adv/search".to_string()
}

fn default_asset() -> String {
    "USDT".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page() -> u32 {
    1
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            asset: default_asset(),
            timeout_secs: default_timeout_secs(),
            page: default_page(),
        }
    }
}

/// reqwest-backed [`OfferSource`] for the live marketplace.
pub struct HttpMarketplace {
    client: Client,
    config: MarketConfig,
}

impl HttpMarketplace {
    /// Create a new marketplace client.
    pub fn new(config: MarketConfig) -> MarketResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MarketError::Client(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// The configured stable asset code.
    pub fn asset(&self) -> &str {
        &self.config.asset
    }
}

#[async_trait]
impl OfferSource for HttpMarketplace {
    async fn fetch_offers(&self, query: &OfferQuery) -> MarketResult<String> {
        debug!(
            fiat = %query.fiat,
            amount = ?query.amount,
            payment_method = ?query.payment_method,
            trade_type = %query.trade_type,
            merchant_only = query.merchant_only,
            rows = query.rows,
            "Requesting advertisement book"
        );

        let payload = SearchRequest::from_query(query, &self.config.asset, self.config.page);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MarketError::TransportUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketError::Http(format!("HTTP {status}: {body}")));
        }

        response
            .text()
            .await
            .map_err(|e| MarketError::TransportUnavailable(e.to_string()))
    }
}
