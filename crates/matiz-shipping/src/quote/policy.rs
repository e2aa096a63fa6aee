//! Fallback policy for postal codes with no configured coverage.

use crate::money::{Currency, Money};
use crate::quote::Quote;
use serde::{Deserialize, Serialize};

/// Reason string attached to every fallback quote.
pub const NO_COVERAGE_REASON: &str =
    "No coverage information available for this postal code; estimate shown, confirm at checkout.";

/// What to quote when no zone matches.
///
/// Invalid and out-of-coverage postal codes both land here, so checkout
/// is never left without a number. The policy is catalog-independent:
/// one flat cost, one coarse global free-shipping threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackPolicy {
    /// Flat cost quoted when no zone matches.
    pub cost: Money,
    /// Global subtotal threshold that waives even the fallback cost.
    pub free_shipping_threshold: Option<Money>,
    /// Delivery window shown for fallback quotes.
    pub estimated_days: String,
}

impl FallbackPolicy {
    /// Create a policy with the given flat cost.
    pub fn new(cost: Money) -> Self {
        Self {
            cost,
            free_shipping_threshold: None,
            estimated_days: "3-7 días".to_string(),
        }
    }

    /// Set the global free-shipping threshold.
    pub fn with_free_shipping_threshold(mut self, threshold: Money) -> Self {
        self.free_shipping_threshold = Some(threshold);
        self
    }

    /// Set the delivery-window string.
    pub fn with_estimated_days(mut self, estimated_days: impl Into<String>) -> Self {
        self.estimated_days = estimated_days.into();
        self
    }

    /// Produce the fallback quote for a subtotal.
    ///
    /// The reason always carries [`NO_COVERAGE_REASON`]: even a waived
    /// cost is still an estimate the customer should confirm.
    pub fn quote(&self, subtotal: &Money) -> Quote {
        let is_free = self
            .free_shipping_threshold
            .as_ref()
            .map(|threshold| subtotal.meets(threshold))
            .unwrap_or(false);

        Quote {
            zone: None,
            cost: if is_free {
                Money::zero(self.cost.currency)
            } else {
                self.cost
            },
            is_free,
            estimated_days: self.estimated_days.clone(),
            reason: NO_COVERAGE_REASON.to_string(),
        }
    }
}

impl Default for FallbackPolicy {
    /// The retailer's standard nationwide estimate: MX$250.00, no global
    /// free-shipping threshold.
    fn default() -> Self {
        Self::new(Money::from_decimal(250.0, Currency::MXN))
    }
}
