//! The query engine: one message in, one reply out.
//!
//! [`QueryEngine`] owns the immutable [`Catalog`] and the compiled
//! heuristics. It holds no per-request state, so a single instance can be
//! shared (e.g. behind an `Arc`) by any number of concurrent requests.

use anyhow::Result;

use crate::catalog::Catalog;
use crate::intent::{IntentExtractor, QueryIntent};
use crate::respond::{shape, Reply, ResponseOptions};

#[derive(Debug, Clone)]
pub struct QueryEngine {
    catalog: Catalog,
    extractor: IntentExtractor,
    options: ResponseOptions,
}

impl QueryEngine {
    pub fn new(catalog: Catalog, options: ResponseOptions) -> Result<Self> {
        Ok(Self {
            catalog,
            extractor: IntentExtractor::new()?,
            options,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &ResponseOptions {
        &self.options
    }

    pub fn interpret(&self, message: &str) -> QueryIntent {
        self.extractor.extract(message)
    }

    /// Interprets `message`, filters the catalog, and shapes the reply.
    pub fn answer(&self, message: &str) -> Reply {
        let intent = self.interpret(message);
        shape(&intent, self.catalog.records(), &self.options)
    }
}
