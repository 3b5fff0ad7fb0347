//! Catalog file loading and listing.
//!
//! The catalog is read once at startup and handed to the engine as an
//! immutable [`Catalog`]. Used by `phonefinder serve`, `phonefinder ask`,
//! and `phonefinder catalog`.

use anyhow::{Context, Result};
use phone_finder_core::Catalog;
use std::path::Path;

use crate::card::format_inr;
use crate::config::Config;

/// Reads and validates the catalog file named in `[catalog].path`.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    load_catalog_file(&config.catalog.path)
}

pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let catalog = Catalog::from_json_str(&content)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// CLI entry point for `phonefinder catalog`.
pub fn list_catalog(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!("{:<12} {:<28} {:>12}", "BRAND", "MODEL", "PRICE");
    for record in catalog.records() {
        println!(
            "{:<12} {:<28} {:>12}",
            record.brand,
            record.model,
            format_inr(record.price)
        );
    }
    println!();
    println!("{} phones", catalog.len());

    Ok(())
}
