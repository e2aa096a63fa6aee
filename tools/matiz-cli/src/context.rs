//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use matiz_shipping::prelude::*;

use crate::config::CatalogFile;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// The loaded zone catalog.
    pub catalog: ZoneCatalog,
    /// Fallback policy from the catalog file.
    pub fallback: FallbackPolicy,
    /// Output handler.
    pub output: Output,
    /// Path the catalog was loaded from.
    pub source: PathBuf,
}

impl Context {
    /// Load context from a catalog file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let path = match config_path {
            Some(path) => PathBuf::from(path),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                Self::find_catalog(&cwd).context(
                    "No catalog file found (looked for zones.toml / zones.json); pass --config",
                )?
            }
        };

        let file = CatalogFile::load(&path)?;
        let (catalog, fallback) = file.into_parts()?;

        Ok(Self {
            catalog,
            fallback,
            output,
            source: path,
        })
    }

    /// Find a catalog file in the directory tree.
    fn find_catalog(start: &Path) -> Option<PathBuf> {
        let catalog_names = ["zones.toml", ".zones.toml", "zones.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &catalog_names {
                let path = current.join(name);
                if path.exists() {
                    return Some(path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Build a quoter over the loaded catalog.
    pub fn quoter(&self) -> Quoter {
        Quoter::new(
            SharedCatalog::new(self.catalog.clone()),
            self.fallback.clone(),
        )
    }
}
