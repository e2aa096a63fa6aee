//! The quote record returned to checkout.

use crate::ids::ZoneId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The computed result of resolving a postal code and subtotal.
///
/// Ephemeral: computed per call, never persisted. The UI adds [`cost`]
/// to the cart subtotal for the amount charged and displays
/// [`estimated_days`] and [`reason`] verbatim.
///
/// [`cost`]: Quote::cost
/// [`estimated_days`]: Quote::estimated_days
/// [`reason`]: Quote::reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// The matched zone, or `None` when the fallback policy answered.
    pub zone: Option<ZoneId>,
    /// Shipping cost to charge; zero when shipping is free.
    pub cost: Money,
    /// Whether shipping is free for this quote.
    pub is_free: bool,
    /// Human-readable delivery window.
    pub estimated_days: String,
    /// Explanation of the outcome. Non-empty when free shipping was
    /// earned, when the zone is inherently free, or when the fallback
    /// policy answered; empty for an ordinary paid quote.
    pub reason: String,
}

impl Quote {
    /// Check whether this quote came from the fallback policy rather
    /// than a configured zone.
    pub fn is_fallback(&self) -> bool {
        self.zone.is_none()
    }
}
