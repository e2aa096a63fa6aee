//! Shipping-zone resolution and quote computation for the Matiz storefront.
//!
//! This crate answers one question for checkout: given a customer's postal
//! code and cart subtotal, what does shipping cost? It provides:
//!
//! - **Zones**: configured shipping regions with postal-code coverage,
//!   price, free-shipping threshold, and a delivery-window estimate
//! - **Catalog**: an immutable, priority-ordered zone collection with
//!   atomic publication for live catalog updates
//! - **Quoting**: a total, side-effect-free resolver that always produces
//!   a quote, falling back to a configured default when no zone covers
//!   the postal code
//!
//! # Example
//!
//! ```rust,ignore
//! use matiz_shipping::prelude::*;
//!
//! let zone = ShippingZone::new("cdmx-centro", "CDMX Centro", Money::from_decimal(150.0, Currency::MXN))
//!     .with_range("01000", "05999")
//!     .with_free_shipping_threshold(Money::from_decimal(1500.0, Currency::MXN))
//!     .with_estimated_days("2-3 días");
//!
//! let catalog = ZoneCatalog::new(vec![zone])?;
//! let quoter = Quoter::new(SharedCatalog::new(catalog), FallbackPolicy::default());
//!
//! // Never fails, whatever the customer typed.
//! let quote = quoter.quote("CP 03100 ", Money::from_decimal(1600.0, Currency::MXN));
//! assert!(quote.is_free);
//! ```

pub mod api;
pub mod error;
pub mod ids;
pub mod money;
pub mod postal;

pub mod quote;
pub mod zones;

pub use error::ShippingError;
pub use ids::ZoneId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ShippingError;
    pub use crate::ids::ZoneId;
    pub use crate::money::{Currency, Money};

    // Postal codes
    pub use crate::postal::{PostalCode, POSTAL_CODE_WIDTH};

    // Zones
    pub use crate::zones::{
        CatalogWarning, PostalCodeRange, SharedCatalog, ShippingZone, ZoneCatalog,
    };

    // Quoting
    pub use crate::quote::{FallbackPolicy, Quote, Quoter, NO_COVERAGE_REASON};

    // Wire contract
    pub use crate::api::{QuoteRequest, QuoteResponse};
}
