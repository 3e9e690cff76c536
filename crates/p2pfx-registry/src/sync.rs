//! Registration of payment methods discovered in marketplace responses.

use p2pfx_book::parse_payment_methods;
use p2pfx_core::PaymentMethod;
use tracing::debug;

use crate::error::RegistryResult;
use crate::store::ReferenceStore;

/// Parse a search response and upsert every payment method it lists.
///
/// Returns the resulting method set for the response's currency. Fails
/// like the offer parser on declined or empty responses, and with
/// `CurrencyNotFound` when a record names a currency the store does not
/// know. A response whose records list no methods yields an empty set.
pub fn register_payment_methods(
    store: &ReferenceStore,
    raw: &str,
) -> RegistryResult<Vec<PaymentMethod>> {
    let listings = parse_payment_methods(raw)?;

    let Some(first) = listings.first() else {
        return Ok(Vec::new());
    };
    let currency = store.resolve_currency_by_code(&first.fiat)?;

    for listing in &listings {
        let listing_currency = if listing.fiat == currency.code {
            currency.clone()
        } else {
            store.resolve_currency_by_code(&listing.fiat)?
        };
        store.upsert_payment_method(
            listing.short_name.clone(),
            listing.display_name.clone(),
            &listing_currency,
        );
    }

    debug!(
        currency = %currency.code,
        listings = listings.len(),
        "Registered payment methods"
    );

    Ok(store.payment_methods_for(&currency))
}
