//! The zone catalog: an immutable, priority-ordered zone collection.

use crate::error::ShippingError;
use crate::ids::ZoneId;
use crate::money::{Currency, Money};
use crate::postal::PostalCode;
use crate::zones::zone::{PostalCodeRange, ShippingZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration problem detected at catalog load.
///
/// Warnings never affect resolution: the offending range is skipped at
/// match time and everything else behaves normally. Tooling is expected
/// to surface them to the catalog's maintainers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CatalogWarning {
    /// A range whose bounds are reversed (`start > end`).
    InvertedRange {
        zone: ZoneId,
        start: String,
        end: String,
    },
    /// A range bound that is not a fixed-width digit string.
    MalformedBound { zone: ZoneId, bound: String },
    /// Two ranges within the same zone overlap.
    SelfOverlap {
        zone: ZoneId,
        first: PostalCodeRange,
        second: PostalCodeRange,
    },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::InvertedRange { zone, start, end } => {
                write!(f, "zone {zone}: inverted range {start}-{end} will never match")
            }
            CatalogWarning::MalformedBound { zone, bound } => {
                write!(f, "zone {zone}: range bound {bound:?} is not a 5-digit code")
            }
            CatalogWarning::SelfOverlap { zone, first, second } => {
                write!(
                    f,
                    "zone {zone}: ranges {}-{} and {}-{} overlap",
                    first.start, first.end, second.start, second.end
                )
            }
        }
    }
}

/// Immutable, ordered collection of configured shipping zones.
///
/// Zones are held sorted by [`ShippingZone::priority`] (stable, so equal
/// priorities keep declaration order) and matching always walks them in
/// that order, which makes resolution deterministic even when zones
/// declare overlapping coverage. A catalog is never mutated in place;
/// publishing an updated catalog means building a new one and swapping
/// the reference via [`super::SharedCatalog`].
///
/// Deliberately not deserializable: a catalog only comes into existence
/// through [`ZoneCatalog::new`], which is where validation happens.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCatalog {
    zones: Vec<ShippingZone>,
    warnings: Vec<CatalogWarning>,
    currency: Currency,
}

impl ZoneCatalog {
    /// Build a catalog from configured zones.
    ///
    /// Returns an error for configuration that cannot be resolved
    /// deterministically (duplicate IDs, negative amounts, mixed
    /// currencies). Recoverable problems (inverted ranges, malformed
    /// bounds, self-overlapping coverage) become [`CatalogWarning`]s
    /// instead and the affected ranges are skipped at match time.
    pub fn new(mut zones: Vec<ShippingZone>) -> Result<Self, ShippingError> {
        let currency = zones
            .first()
            .map(|z| z.cost.currency)
            .unwrap_or_default();

        for zone in &zones {
            validate_zone(zone, currency)?;
        }
        for (i, zone) in zones.iter().enumerate() {
            for other in &zones[i + 1..] {
                if zone.id == other.id {
                    return Err(ShippingError::DuplicateZoneId(zone.id.to_string()));
                }
            }
        }

        let warnings = collect_warnings(&zones);
        zones.sort_by_key(|z| z.priority);

        Ok(Self {
            zones,
            warnings,
            currency,
        })
    }

    /// The zones in effective priority order.
    pub fn zones(&self) -> &[ShippingZone] {
        &self.zones
    }

    /// Number of configured zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the catalog has no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// The currency all catalog amounts are declared in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Configuration warnings collected at load.
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    /// Look up a zone by ID.
    pub fn get(&self, id: &ZoneId) -> Option<&ShippingZone> {
        self.zones.iter().find(|z| &z.id == id)
    }

    /// Find the first zone covering a postal code.
    ///
    /// Walks zones in priority order and stops at the first hit, so the
    /// result is deterministic even when several zones cover the code.
    /// Returns `None` when nothing covers it.
    pub fn match_postal_code(&self, code: &PostalCode) -> Option<&ShippingZone> {
        self.zones.iter().find(|z| z.covers(code))
    }

    /// Hardcoded single-zone catalog for when no configured catalog can
    /// be loaded at all. Covers every postal code at the standard
    /// nationwide rate so checkout is never left without a number.
    pub fn minimal_fallback() -> Self {
        let nationwide = ShippingZone::new(
            "nacional",
            "Envío nacional",
            Money::from_decimal(250.0, Currency::MXN),
        )
        .with_range("00000", "99999")
        .with_estimated_days("3-7 días");

        // A single well-formed zone cannot fail validation.
        Self::new(vec![nationwide]).expect("minimal fallback catalog is valid")
    }
}

fn validate_zone(zone: &ShippingZone, currency: Currency) -> Result<(), ShippingError> {
    if zone.cost.is_negative() {
        return Err(ShippingError::NegativeAmount {
            zone: zone.id.to_string(),
            field: "cost",
        });
    }
    if zone.cost.currency != currency {
        return Err(ShippingError::CurrencyMismatch {
            zone: zone.id.to_string(),
            expected: currency.to_string(),
            got: zone.cost.currency.to_string(),
        });
    }
    if let Some(threshold) = &zone.free_shipping_threshold {
        if threshold.is_negative() {
            return Err(ShippingError::NegativeAmount {
                zone: zone.id.to_string(),
                field: "free_shipping_threshold",
            });
        }
        if threshold.currency != currency {
            return Err(ShippingError::CurrencyMismatch {
                zone: zone.id.to_string(),
                expected: currency.to_string(),
                got: threshold.currency.to_string(),
            });
        }
    }
    Ok(())
}

fn collect_warnings(zones: &[ShippingZone]) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();

    for zone in zones {
        for range in &zone.ranges {
            if !range.is_well_formed() {
                for bound in [&range.start, &range.end] {
                    if bound.len() != crate::postal::POSTAL_CODE_WIDTH
                        || !bound.bytes().all(|b| b.is_ascii_digit())
                    {
                        warnings.push(CatalogWarning::MalformedBound {
                            zone: zone.id.clone(),
                            bound: bound.clone(),
                        });
                    }
                }
            } else if range.is_inverted() {
                warnings.push(CatalogWarning::InvertedRange {
                    zone: zone.id.clone(),
                    start: range.start.clone(),
                    end: range.end.clone(),
                });
            }
        }

        for (i, first) in zone.ranges.iter().enumerate() {
            for second in &zone.ranges[i + 1..] {
                if first.overlaps(second) {
                    warnings.push(CatalogWarning::SelfOverlap {
                        zone: zone.id.clone(),
                        first: first.clone(),
                        second: second.clone(),
                    });
                }
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(raw: &str) -> PostalCode {
        PostalCode::parse(raw).unwrap()
    }

    fn mxn(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::MXN)
    }

    fn centro() -> ShippingZone {
        ShippingZone::new("cdmx-centro", "CDMX Centro", mxn(150.0))
            .with_priority(10)
            .with_range("01000", "05999")
            .with_free_shipping_threshold(mxn(1500.0))
            .with_estimated_days("2-3 días")
    }

    fn norte() -> ShippingZone {
        ShippingZone::new("norte", "Zona Norte", mxn(220.0))
            .with_priority(20)
            .with_range("06000", "07999")
            .with_estimated_days("4-6 días")
    }

    #[test]
    fn test_match_returns_first_zone_in_priority_order() {
        // Both zones cover 06000; the misconfiguration must resolve
        // deterministically to the higher-priority zone.
        let wide = ShippingZone::new("wide", "Wide", mxn(300.0))
            .with_priority(50)
            .with_range("00000", "99999");
        let catalog = ZoneCatalog::new(vec![wide, norte()]).unwrap();

        for _ in 0..3 {
            let matched = catalog.match_postal_code(&cp("06000")).unwrap();
            assert_eq!(matched.id.as_str(), "norte");
        }
    }

    #[test]
    fn test_equal_priority_keeps_declaration_order() {
        let a = ShippingZone::new("a", "A", mxn(100.0)).with_range("00000", "99999");
        let b = ShippingZone::new("b", "B", mxn(100.0)).with_range("00000", "99999");
        let catalog = ZoneCatalog::new(vec![a, b]).unwrap();

        assert_eq!(catalog.match_postal_code(&cp("03100")).unwrap().id.as_str(), "a");
    }

    #[test]
    fn test_no_match_out_of_coverage() {
        let catalog = ZoneCatalog::new(vec![centro()]).unwrap();
        assert!(catalog.match_postal_code(&cp("99999")).is_none());
    }

    #[test]
    fn test_duplicate_zone_id_rejected() {
        let result = ZoneCatalog::new(vec![centro(), centro()]);
        assert!(matches!(result, Err(ShippingError::DuplicateZoneId(_))));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let zone = ShippingZone::new("bad", "Bad", mxn(-1.0));
        assert!(matches!(
            ZoneCatalog::new(vec![zone]),
            Err(ShippingError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let usd = ShippingZone::new("usd", "USD", Money::from_decimal(10.0, Currency::USD));
        assert!(matches!(
            ZoneCatalog::new(vec![centro(), usd]),
            Err(ShippingError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_inverted_range_warns_and_other_ranges_still_match() {
        let zone = ShippingZone::new("mixta", "Mixta", mxn(180.0))
            .with_range("09999", "08000")
            .with_range("10000", "19999");
        let catalog = ZoneCatalog::new(vec![zone]).unwrap();

        assert_eq!(catalog.warnings().len(), 1);
        assert!(matches!(
            catalog.warnings()[0],
            CatalogWarning::InvertedRange { .. }
        ));

        // The inverted range is skipped, not fatal.
        assert!(catalog.match_postal_code(&cp("08500")).is_none());
        assert!(catalog.match_postal_code(&cp("15000")).is_some());
    }

    #[test]
    fn test_self_overlap_warns() {
        let zone = ShippingZone::new("solapada", "Solapada", mxn(150.0))
            .with_range("01000", "05999")
            .with_range("05000", "06999");
        let catalog = ZoneCatalog::new(vec![zone]).unwrap();

        assert!(catalog
            .warnings()
            .iter()
            .any(|w| matches!(w, CatalogWarning::SelfOverlap { .. })));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = ZoneCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.match_postal_code(&cp("03100")).is_none());
    }

    #[test]
    fn test_minimal_fallback_covers_everything() {
        let catalog = ZoneCatalog::minimal_fallback();
        assert!(catalog.match_postal_code(&cp("00000")).is_some());
        assert!(catalog.match_postal_code(&cp("99999")).is_some());
        assert!(catalog.warnings().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = ZoneCatalog::new(vec![centro(), norte()]).unwrap();
        assert!(catalog.get(&ZoneId::new("norte")).is_some());
        assert!(catalog.get(&ZoneId::new("sur")).is_none());
    }
}
