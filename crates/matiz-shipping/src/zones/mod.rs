//! Shipping zones: configuration entities and the catalog that holds them.

mod catalog;
mod shared;
mod zone;

pub use catalog::{CatalogWarning, ZoneCatalog};
pub use shared::SharedCatalog;
pub use zone::{PostalCodeRange, ShippingZone};
