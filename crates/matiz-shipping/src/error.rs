//! Shipping engine error types.
//!
//! These errors surface only when a catalog is built from configuration.
//! Quote resolution itself is total and never returns an error: a postal
//! code that cannot be matched degrades to the fallback policy instead.

use thiserror::Error;

/// Errors that can occur while building a zone catalog.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// Two zones declare the same ID.
    #[error("Duplicate zone id: {0}")]
    DuplicateZoneId(String),

    /// A zone declares a negative cost or threshold.
    #[error("Negative amount in zone {zone}: {field}")]
    NegativeAmount { zone: String, field: &'static str },

    /// A zone's amounts use a different currency than the catalog.
    #[error("Currency mismatch in zone {zone}: expected {expected}, got {got}")]
    CurrencyMismatch {
        zone: String,
        expected: String,
        got: String,
    },
}
