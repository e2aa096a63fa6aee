//! Zone-catalog file schema and loading.
//!
//! The admin tooling publishes catalogs as TOML (JSON is accepted too).
//! Amounts in the file are decimal pesos; they convert to cents-based
//! [`Money`] here, at the file boundary, so the engine never sees floats.

use std::path::Path;

use anyhow::{Context as _, Result};
use matiz_shipping::prelude::*;
use serde::{Deserialize, Serialize};

/// On-disk catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Currency code for every amount in the file (default "MXN").
    #[serde(default)]
    pub currency: Option<String>,

    /// Fallback policy for postal codes no zone covers.
    #[serde(default)]
    pub fallback: Option<FallbackFile>,

    /// Configured zones.
    #[serde(default)]
    pub zones: Vec<ZoneFile>,
}

/// Fallback section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackFile {
    /// Flat cost quoted when no zone matches.
    pub cost: f64,

    /// Global subtotal threshold that waives the fallback cost.
    #[serde(default)]
    pub free_shipping_threshold: Option<f64>,

    /// Delivery window shown for fallback quotes.
    #[serde(default = "default_fallback_days")]
    pub estimated_days: String,
}

fn default_fallback_days() -> String {
    "3-7 días".to_string()
}

/// One zone entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Explicit match priority; lower wins. Required so that reordering
    /// the file cannot silently change tie-break behavior.
    pub priority: i32,
    pub cost: f64,
    #[serde(default)]
    pub free_shipping_threshold: Option<f64>,
    pub estimated_days: String,
    #[serde(default)]
    pub ranges: Vec<RangeFile>,
}

/// One inclusive postal-code range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeFile {
    pub start: String,
    pub end: String,
}

impl CatalogFile {
    /// Load a catalog file, dispatching on extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        if path.extension().map_or(false, |e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))
        }
    }

    /// The currency every amount in the file is declared in.
    pub fn currency(&self) -> Result<Currency> {
        match &self.currency {
            Some(code) => Currency::from_code(code)
                .with_context(|| format!("Unknown currency code: {}", code)),
            None => Ok(Currency::MXN),
        }
    }

    /// Convert the file into engine types.
    pub fn into_parts(self) -> Result<(ZoneCatalog, FallbackPolicy)> {
        let currency = self.currency()?;

        let zones = self
            .zones
            .into_iter()
            .map(|z| ShippingZone {
                id: ZoneId::new(z.id),
                name: z.name,
                description: z.description,
                priority: z.priority,
                ranges: z
                    .ranges
                    .into_iter()
                    .map(|r| PostalCodeRange::new(r.start, r.end))
                    .collect(),
                cost: Money::from_decimal(z.cost, currency),
                free_shipping_threshold: z
                    .free_shipping_threshold
                    .map(|t| Money::from_decimal(t, currency)),
                estimated_days: z.estimated_days,
            })
            .collect();

        let catalog = ZoneCatalog::new(zones).context("Invalid zone catalog")?;

        let fallback = match self.fallback {
            Some(f) => {
                let mut policy = FallbackPolicy::new(Money::from_decimal(f.cost, currency))
                    .with_estimated_days(f.estimated_days);
                if let Some(threshold) = f.free_shipping_threshold {
                    policy = policy
                        .with_free_shipping_threshold(Money::from_decimal(threshold, currency));
                }
                policy
            }
            None => FallbackPolicy::new(Money::from_decimal(250.0, currency)),
        };

        Ok((catalog, fallback))
    }
}
