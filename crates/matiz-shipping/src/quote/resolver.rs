//! Cost resolution and the quoting facade.

use crate::money::Money;
use crate::postal::PostalCode;
use crate::quote::{FallbackPolicy, Quote};
use crate::zones::{SharedCatalog, ShippingZone, ZoneCatalog};

/// Compute the quote for a matched zone and subtotal.
///
/// Free shipping applies when the zone's threshold is met (inclusive: a
/// subtotal exactly equal to the threshold qualifies) or when the zone is
/// inherently free. The reason is non-empty only in those two cases.
pub fn quote_for_zone(zone: &ShippingZone, subtotal: &Money) -> Quote {
    let earned = zone
        .free_shipping_threshold
        .as_ref()
        .filter(|threshold| subtotal.meets(threshold));
    let is_free = earned.is_some() || zone.is_inherently_free();

    let reason = match earned {
        Some(threshold) => format!(
            "Free shipping: subtotal meets the {} minimum for this zone.",
            threshold.display()
        ),
        None if zone.is_inherently_free() => "This zone always ships free of charge.".to_string(),
        None => String::new(),
    };

    Quote {
        zone: Some(zone.id.clone()),
        cost: if is_free {
            Money::zero(zone.cost.currency)
        } else {
            zone.cost
        },
        is_free,
        estimated_days: zone.estimated_days.clone(),
        reason,
    }
}

/// Resolve a quote against a specific catalog snapshot.
///
/// Total over its input domain: malformed postal codes and codes with no
/// configured coverage both take the fallback path. Pure given the
/// snapshot: identical inputs always produce identical quotes.
pub fn quote_with(
    catalog: &ZoneCatalog,
    fallback: &FallbackPolicy,
    raw_postal_code: &str,
    subtotal: &Money,
) -> Quote {
    let matched = PostalCode::parse(raw_postal_code)
        .and_then(|code| catalog.match_postal_code(&code));

    match matched {
        Some(zone) => quote_for_zone(zone, subtotal),
        None => fallback.quote(subtotal),
    }
}

/// The stateless entry point consumed by the checkout UI.
///
/// Recomputed synchronously whenever postal code or subtotal changes; no
/// I/O, no caching, cost is O(zones × ranges). Holds a [`SharedCatalog`]
/// so live catalog publications are picked up on the next call while the
/// current call keeps its complete snapshot.
#[derive(Debug, Clone)]
pub struct Quoter {
    catalog: SharedCatalog,
    fallback: FallbackPolicy,
}

impl Quoter {
    /// Create a quoter over a published catalog.
    pub fn new(catalog: SharedCatalog, fallback: FallbackPolicy) -> Self {
        Self { catalog, fallback }
    }

    /// The catalog handle, for publishing updates.
    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// Resolve a quote. Never fails, whatever the input.
    pub fn quote(&self, raw_postal_code: &str, subtotal: Money) -> Quote {
        let snapshot = self.catalog.snapshot();
        quote_with(&snapshot, &self.fallback, raw_postal_code, &subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn mxn(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::MXN)
    }

    fn centro() -> ShippingZone {
        ShippingZone::new("cdmx-centro", "CDMX Centro", mxn(150.0))
            .with_range("01000", "05999")
            .with_free_shipping_threshold(mxn(1500.0))
            .with_estimated_days("2-3 días")
    }

    fn quoter(zones: Vec<ShippingZone>) -> Quoter {
        let catalog = ZoneCatalog::new(zones).unwrap();
        Quoter::new(SharedCatalog::new(catalog), FallbackPolicy::default())
    }

    #[test]
    fn test_threshold_met_waives_cost() {
        let quote = quoter(vec![centro()]).quote("03100", mxn(1600.0));

        assert_eq!(quote.zone.as_ref().unwrap().as_str(), "cdmx-centro");
        assert!(quote.is_free);
        assert!(quote.cost.is_zero());
        assert_eq!(quote.estimated_days, "2-3 días");
        assert!(quote.reason.contains("MX$1500.00"));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let q = quoter(vec![centro()]);

        let at = q.quote("03100", mxn(1500.0));
        assert!(at.is_free);
        assert!(at.cost.is_zero());

        let below = q.quote("03100", mxn(1499.99));
        assert!(!below.is_free);
        assert_eq!(below.cost, mxn(150.0));
        assert!(below.reason.is_empty());
    }

    #[test]
    fn test_zone_without_threshold_always_charges() {
        let zone = ShippingZone::new("norte", "Zona Norte", mxn(220.0))
            .with_range("06000", "07999")
            .with_estimated_days("4-6 días");

        let quote = quoter(vec![zone]).quote("06100", mxn(99999.0));
        assert!(!quote.is_free);
        assert_eq!(quote.cost, mxn(220.0));
        assert!(quote.reason.is_empty());
    }

    #[test]
    fn test_inherently_free_zone() {
        let zone = ShippingZone::new("pickup", "Recoger en tienda", Money::zero(Currency::MXN))
            .with_range("01000", "01999")
            .with_estimated_days("mismo día");

        let quote = quoter(vec![zone]).quote("01500", mxn(1.0));
        assert!(quote.is_free);
        assert!(quote.cost.is_zero());
        assert!(!quote.reason.is_empty());
    }

    #[test]
    fn test_no_coverage_falls_back() {
        let quote = quoter(vec![centro()]).quote("99999", mxn(500.0));

        assert!(quote.is_fallback());
        assert_eq!(quote.cost, mxn(250.0));
        assert!(!quote.is_free);
        assert_eq!(quote.reason, crate::quote::NO_COVERAGE_REASON);
    }

    #[test]
    fn test_invalid_postal_code_falls_back() {
        let q = quoter(vec![centro()]);

        for raw in ["", "abc", "123", "0310000", "✂✂✂✂✂"] {
            let quote = q.quote(raw, mxn(500.0));
            assert!(quote.is_fallback(), "input {raw:?} must fall back");
        }
    }

    #[test]
    fn test_normalization_before_matching() {
        let q = quoter(vec![centro()]);
        assert_eq!(q.quote("CP 03100 ", mxn(1600.0)), q.quote("03100", mxn(1600.0)));
    }

    #[test]
    fn test_quote_is_idempotent() {
        let q = quoter(vec![centro()]);
        let first = q.quote("03100", mxn(1234.56));
        let second = q.quote("03100", mxn(1234.56));
        assert_eq!(first, second);
    }

    #[test]
    fn test_published_catalog_applies_to_next_quote() {
        let q = quoter(vec![centro()]);
        assert!(q.quote("06100", mxn(500.0)).is_fallback());

        let norte = ShippingZone::new("norte", "Zona Norte", mxn(220.0))
            .with_range("06000", "07999")
            .with_estimated_days("4-6 días");
        q.catalog()
            .publish(ZoneCatalog::new(vec![centro(), norte]).unwrap());

        assert_eq!(
            q.quote("06100", mxn(500.0)).zone.as_ref().unwrap().as_str(),
            "norte"
        );
    }
}
