//! Quote computation: cost resolution, fallback policy, and the facade
//! the checkout UI calls.

mod policy;
mod quote;
mod resolver;

pub use policy::{FallbackPolicy, NO_COVERAGE_REASON};
pub use quote::Quote;
pub use resolver::{quote_for_zone, quote_with, Quoter};
