//! In-memory reference data store.

use chrono::Utc;
use dashmap::DashMap;
use p2pfx_core::{Currency, PaymentMethod};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};

/// Store for currencies and their payment methods.
///
/// Identifiers are assigned on insert. Payment-method upserts are keyed
/// by (short_name, currency code): re-registering an existing method
/// keeps its id, refreshes `updated_at` and overwrites the display name
/// (last write wins).
#[derive(Default)]
pub struct ReferenceStore {
    currencies: DashMap<u32, Currency>,
    currency_ids_by_code: DashMap<String, u32>,
    methods: DashMap<u32, PaymentMethod>,
    method_ids_by_key: DashMap<(String, String), u32>,
    next_currency_id: AtomicU32,
    next_method_id: AtomicU32,
}

impl ReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a currency, or return the existing record for its code.
    pub fn add_currency(
        &self,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Currency {
        let code = code.into();
        let id = *self
            .currency_ids_by_code
            .entry(code.clone())
            .or_insert_with(|| self.next_currency_id.fetch_add(1, Ordering::Relaxed) + 1);

        let currency = Currency::new(id, code, name.into());
        self.currencies.insert(id, currency.clone());
        currency
    }

    pub fn resolve_currency_by_code(&self, code: &str) -> RegistryResult<Currency> {
        let id = self
            .currency_ids_by_code
            .get(code)
            .map(|entry| *entry)
            .ok_or_else(|| RegistryError::CurrencyNotFound(code.to_string()))?;
        self.resolve_currency_by_id(id)
    }

    pub fn resolve_currency_by_id(&self, id: u32) -> RegistryResult<Currency> {
        self.currencies
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or_else(|| RegistryError::CurrencyNotFound(id.to_string()))
    }

    pub fn resolve_payment_method_by_id(&self, id: u32) -> RegistryResult<PaymentMethod> {
        self.methods
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(RegistryError::PaymentMethodNotFound(id))
    }

    /// Insert or refresh a payment method for a currency.
    pub fn upsert_payment_method(
        &self,
        short_name: impl Into<String>,
        display_name: Option<String>,
        currency: &Currency,
    ) -> PaymentMethod {
        let short_name = short_name.into();
        let key = (short_name.clone(), currency.code.clone());
        let id = *self
            .method_ids_by_key
            .entry(key)
            .or_insert_with(|| self.next_method_id.fetch_add(1, Ordering::Relaxed) + 1);

        let method = PaymentMethod {
            id,
            short_name,
            display_name,
            currency_code: currency.code.clone(),
            updated_at: Utc::now(),
        };
        self.methods.insert(id, method.clone());

        debug!(
            method = %method.short_name,
            currency = %currency.code,
            id,
            "Upserted payment method"
        );
        method
    }

    /// Payment-method options for a selected currency.
    ///
    /// This is the dependent-options query the presentation layer calls
    /// whenever the currency selection changes. Sorted by short name
    /// for stable ordering.
    pub fn payment_methods_for(&self, currency: &Currency) -> Vec<PaymentMethod> {
        let mut methods: Vec<_> = self
            .methods
            .iter()
            .filter(|entry| entry.currency_code == currency.code)
            .map(|entry| entry.clone())
            .collect();
        methods.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        methods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_resolve_currency() {
        let store = ReferenceStore::new();
        let rub = store.add_currency("RUB", "Russian Ruble");

        assert_eq!(store.resolve_currency_by_code("RUB").unwrap(), rub);
        assert_eq!(store.resolve_currency_by_id(rub.id).unwrap(), rub);
        assert!(matches!(
            store.resolve_currency_by_code("TRY"),
            Err(RegistryError::CurrencyNotFound(_))
        ));
    }

    #[test]
    fn test_add_currency_keeps_id_for_existing_code() {
        let store = ReferenceStore::new();
        let first = store.add_currency("RUB", "Russia Ruble");
        let second = store.add_currency("RUB", "Russian Ruble");

        assert_eq!(first.id, second.id);
        assert_eq!(
            store.resolve_currency_by_id(first.id).unwrap().name,
            "Russian Ruble"
        );
    }

    #[test]
    fn test_upsert_is_idempotent_per_currency() {
        let store = ReferenceStore::new();
        let rub = store.add_currency("RUB", "Russian Ruble");
        let try_ = store.add_currency("TRY", "Turkish Lira");

        let a = store.upsert_payment_method("Advcash", Some("Advcash".to_string()), &rub);
        let b = store.upsert_payment_method("Advcash", Some("Advcash".to_string()), &rub);
        let c = store.upsert_payment_method("Advcash", Some("Advcash".to_string()), &try_);

        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_eq!(store.payment_methods_for(&rub).len(), 1);
        assert_eq!(store.payment_methods_for(&try_).len(), 1);
    }

    #[test]
    fn test_upsert_last_write_wins_on_display_name() {
        let store = ReferenceStore::new();
        let rub = store.add_currency("RUB", "Russian Ruble");

        store.upsert_payment_method("QIWI", None, &rub);
        let refreshed = store.upsert_payment_method("QIWI", Some("QIWI Wallet".to_string()), &rub);

        let resolved = store.resolve_payment_method_by_id(refreshed.id).unwrap();
        assert_eq!(resolved.display_name.as_deref(), Some("QIWI Wallet"));
    }

    #[test]
    fn test_methods_for_currency_sorted() {
        let store = ReferenceStore::new();
        let rub = store.add_currency("RUB", "Russian Ruble");
        store.upsert_payment_method("QIWI", None, &rub);
        store.upsert_payment_method("Advcash", None, &rub);

        let methods = store.payment_methods_for(&rub);
        assert_eq!(methods[0].short_name, "Advcash");
        assert_eq!(methods[1].short_name, "QIWI");
    }
}
