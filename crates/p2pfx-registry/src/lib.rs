//! Currency and payment-method reference data.
//!
//! The store is in-memory and shared between independent conversions;
//! payment-method upserts are idempotent per (short_name, currency), so
//! concurrent registration of the same response is harmless.

pub mod error;
pub mod store;
pub mod sync;

pub use error::{RegistryError, RegistryResult};
pub use store::ReferenceStore;
pub use sync::register_payment_methods;
