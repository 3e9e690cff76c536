//! Reference data records: fiat currencies and their payment methods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiat currency to convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Store-assigned identifier.
    pub id: u32,
    /// ISO-style code, e.g. "RUB".
    pub code: String,
    /// Display name, e.g. "Russian Ruble".
    pub name: String,
}

impl Currency {
    pub fn new(id: u32, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Payment method available for one currency.
///
/// `short_name` is the marketplace identifier; `display_name` may be
/// missing for methods the marketplace never labeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Store-assigned identifier.
    pub id: u32,
    /// Marketplace identifier, e.g. "Advcash".
    pub short_name: String,
    /// Human-readable name, if the marketplace provided one.
    pub display_name: Option<String>,
    /// Code of the currency this method is scoped to.
    pub currency_code: String,
    /// Last time this record was upserted.
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "Unknown payment method"),
        }
    }
}
