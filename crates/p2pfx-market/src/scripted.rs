//! Scripted [`OfferSource`] for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::client::OfferSource;
use crate::error::{MarketError, MarketResult};
use crate::request::OfferQuery;

/// Fixture-backed offer source.
///
/// Serves queued response texts in order and records every query it
/// receives, so tests can assert on the exact request sequence the
/// planner issued.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<String>>,
    queries: Mutex<Vec<OfferQuery>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response text.
    pub fn push_response(&self, text: impl Into<String>) {
        self.responses.lock().push_back(text.into());
    }

    /// Queries issued so far, in order.
    pub fn queries(&self) -> Vec<OfferQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl OfferSource for ScriptedSource {
    async fn fetch_offers(&self, query: &OfferQuery) -> MarketResult<String> {
        self.queries.lock().push(query.clone());
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| MarketError::TransportUnavailable("script exhausted".to_string()))
    }
}
