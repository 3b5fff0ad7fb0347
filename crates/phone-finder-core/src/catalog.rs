//! The immutable product catalog.
//!
//! A [`Catalog`] is built once (usually from a JSON file read by the
//! application) and then shared read-only by every request. Cloning is
//! cheap: the records live behind an `Arc`.

use anyhow::{bail, Context, Result};
use std::sync::Arc;

use crate::models::ProductRecord;

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ProductRecord]>,
}

impl Catalog {
    /// Validates and freezes a list of records, preserving their order.
    pub fn new(records: Vec<ProductRecord>) -> Result<Self> {
        for (idx, record) in records.iter().enumerate() {
            if record.brand.trim().is_empty() {
                bail!("catalog record #{} has an empty brand", idx);
            }
            if record.model.trim().is_empty() {
                bail!(
                    "catalog record #{} ({}) has an empty model",
                    idx,
                    record.brand
                );
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Parses a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ProductRecord> =
            serde_json::from_str(json).context("catalog is not a valid JSON array of phones")?;
        Self::new(records)
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
