//! Atomic catalog publication.

use crate::zones::ZoneCatalog;
use std::sync::{Arc, RwLock};

/// Cheaply clonable handle to the currently published catalog.
///
/// The catalog itself is immutable; publishing an update swaps the whole
/// `Arc` reference, so concurrent resolutions always see either the old
/// or the new catalog in full, never a partially updated one. A failed
/// reload simply never publishes, leaving the last-known-good catalog
/// live.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Arc<ZoneCatalog>>>,
}

impl SharedCatalog {
    /// Create a handle publishing the given catalog.
    pub fn new(catalog: ZoneCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Get the currently published catalog snapshot.
    ///
    /// The returned `Arc` stays valid for the caller's whole resolution
    /// even if a new catalog is published concurrently.
    pub fn snapshot(&self) -> Arc<ZoneCatalog> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            // A poisoned lock still holds a complete catalog reference;
            // quoting must keep working.
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically replace the published catalog.
    pub fn publish(&self, catalog: ZoneCatalog) {
        let catalog = Arc::new(catalog);
        match self.inner.write() {
            Ok(mut guard) => *guard = catalog,
            Err(poisoned) => *poisoned.into_inner() = catalog,
        }
    }
}

impl Default for SharedCatalog {
    /// A handle publishing the hardcoded minimal fallback catalog.
    fn default() -> Self {
        Self::new(ZoneCatalog::minimal_fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};
    use crate::postal::PostalCode;
    use crate::zones::ShippingZone;

    fn single_zone_catalog(id: &str) -> ZoneCatalog {
        let zone = ShippingZone::new(id, id, Money::from_decimal(150.0, Currency::MXN))
            .with_range("00000", "99999");
        ZoneCatalog::new(vec![zone]).unwrap()
    }

    #[test]
    fn test_snapshot_sees_published_catalog() {
        let shared = SharedCatalog::new(single_zone_catalog("v1"));
        assert_eq!(shared.snapshot().zones()[0].id.as_str(), "v1");

        shared.publish(single_zone_catalog("v2"));
        assert_eq!(shared.snapshot().zones()[0].id.as_str(), "v2");
    }

    #[test]
    fn test_old_snapshot_survives_publish() {
        let shared = SharedCatalog::new(single_zone_catalog("v1"));
        let old = shared.snapshot();

        shared.publish(single_zone_catalog("v2"));

        // The resolution that took the old snapshot keeps a complete catalog.
        assert_eq!(old.zones()[0].id.as_str(), "v1");
        assert_eq!(shared.snapshot().zones()[0].id.as_str(), "v2");
    }

    #[test]
    fn test_concurrent_readers_never_tear() {
        let shared = SharedCatalog::new(single_zone_catalog("v1"));
        let code = PostalCode::parse("03100").unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let code = code.clone();
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = shared.snapshot();
                        // Every snapshot is a whole catalog: exactly one zone.
                        assert_eq!(snapshot.len(), 1);
                        assert!(snapshot.match_postal_code(&code).is_some());
                    }
                })
            })
            .collect();

        for i in 0..100 {
            shared.publish(single_zone_catalog(if i % 2 == 0 { "v2" } else { "v1" }));
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn test_default_is_minimal_fallback() {
        let shared = SharedCatalog::default();
        let code = PostalCode::parse("99999").unwrap();
        assert!(shared.snapshot().match_postal_code(&code).is_some());
    }
}
