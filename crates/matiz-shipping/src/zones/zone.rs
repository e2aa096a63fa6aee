//! Shipping zone configuration types.

use crate::ids::ZoneId;
use crate::money::Money;
use crate::postal::{PostalCode, POSTAL_CODE_WIDTH};
use serde::{Deserialize, Serialize};

/// An inclusive range of fixed-width postal codes.
///
/// Bounds are kept as the digit strings the admin tooling authored. A range
/// is only usable for matching when both bounds are well-formed and
/// `start <= end`; anything else is a configuration error that the catalog
/// surfaces as a load-time warning and skips at match time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostalCodeRange {
    /// Inclusive lower bound.
    pub start: String,
    /// Inclusive upper bound.
    pub end: String,
}

impl PostalCodeRange {
    /// Create a new range.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Check whether a bound is a fixed-width digit string.
    fn bound_well_formed(bound: &str) -> bool {
        bound.len() == POSTAL_CODE_WIDTH && bound.bytes().all(|b| b.is_ascii_digit())
    }

    /// Check whether both bounds are fixed-width digit strings.
    pub fn is_well_formed(&self) -> bool {
        Self::bound_well_formed(&self.start) && Self::bound_well_formed(&self.end)
    }

    /// Check whether the bounds are reversed (`start > end`).
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Check whether this range is usable for matching.
    pub fn is_matchable(&self) -> bool {
        self.is_well_formed() && !self.is_inverted()
    }

    /// Check whether the range covers a postal code.
    ///
    /// Both bounds are inclusive. Comparison is lexicographic, which at
    /// fixed width equals numeric comparison. Unusable ranges never match.
    pub fn contains(&self, code: &PostalCode) -> bool {
        self.is_matchable() && self.start.as_str() <= code.as_str() && code.as_str() <= self.end.as_str()
    }

    /// Check whether two ranges overlap.
    ///
    /// Only meaningful for matchable ranges; used to detect self-overlap
    /// within a single zone at catalog load.
    pub fn overlaps(&self, other: &PostalCodeRange) -> bool {
        self.is_matchable()
            && other.is_matchable()
            && self.start <= other.end
            && other.start <= self.end
    }
}

/// A configured shipping region.
///
/// Created by the admin tooling and read-only to the engine. A zone owns
/// its postal-code coverage, price, optional free-shipping threshold, and
/// the delivery-window string shown to the customer verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingZone {
    /// Stable identifier, unique across the catalog.
    pub id: ZoneId,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Match priority; lower values win. Zones with equal priority keep
    /// their declaration order.
    pub priority: i32,
    /// Postal-code coverage.
    pub ranges: Vec<PostalCodeRange>,
    /// Shipping price for this zone.
    pub cost: Money,
    /// Subtotal at or above which the cost is waived.
    pub free_shipping_threshold: Option<Money>,
    /// Human-readable delivery window (e.g., "2-3 días").
    pub estimated_days: String,
}

impl ShippingZone {
    /// Create a new zone with no coverage and default priority.
    pub fn new(id: impl Into<ZoneId>, name: impl Into<String>, cost: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            priority: 0,
            ranges: Vec::new(),
            cost,
            free_shipping_threshold: None,
            estimated_days: String::new(),
        }
    }

    /// Add a postal-code range.
    pub fn with_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.ranges.push(PostalCodeRange::new(start, end));
        self
    }

    /// Set the match priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the free-shipping threshold.
    pub fn with_free_shipping_threshold(mut self, threshold: Money) -> Self {
        self.free_shipping_threshold = Some(threshold);
        self
    }

    /// Set the delivery-window string.
    pub fn with_estimated_days(mut self, estimated_days: impl Into<String>) -> Self {
        self.estimated_days = estimated_days.into();
        self
    }

    /// Check whether any usable range covers the postal code.
    pub fn covers(&self, code: &PostalCode) -> bool {
        self.ranges.iter().any(|r| r.contains(code))
    }

    /// Check if this zone ships free of charge regardless of subtotal.
    pub fn is_inherently_free(&self) -> bool {
        self.cost.is_zero()
    }
}
