//! Core data models shared by the catalog, the query engine, and the
//! transport layer.
//!
//! The serde shapes of these types are the wire contract: catalog files are
//! arrays of [`ProductRecord`], and chat replies are [`ResponsePayload`]s.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single phone in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Optional stable identifier, used by UIs as a card key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub brand: String,
    pub model: String,
    /// Price in whole rupees.
    pub price: u64,
    /// Technical attributes. A record without a `specs` object fails every
    /// active feature, RAM, or storage predicate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<Specs>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
}

impl ProductRecord {
    /// `"{brand} {model}"`, the name used in every reply.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// Named technical attributes of a phone.
///
/// The recognized keys are typed fields; anything else in the catalog's
/// `specs` object is kept in `other` and still takes part in keyword
/// matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

impl Specs {
    /// All present values: recognized keys first in their fixed order, then
    /// the remaining keys alphabetically.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        [
            &self.display,
            &self.processor,
            &self.camera,
            &self.battery,
            &self.ram,
            &self.storage,
        ]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .chain(self.other.values().map(String::as_str))
    }
}

/// A short user review attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub comment: String,
}

/// The reply sent back for one chat message.
///
/// Serializes as `{"response": "...", "phones": [...]}`; `phones` is omitted
/// when no records are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    #[serde(rename = "response")]
    pub text: String,
    #[serde(rename = "phones", default, skip_serializing_if = "Vec::is_empty")]
    pub matched_records: Vec<ProductRecord>,
}

impl ResponsePayload {
    /// A text-only reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched_records: Vec::new(),
        }
    }

    pub fn with_records(text: impl Into<String>, records: Vec<ProductRecord>) -> Self {
        Self {
            text: text.into(),
            matched_records: records,
        }
    }
}
