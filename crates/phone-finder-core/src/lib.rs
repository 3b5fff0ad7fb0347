//! # Phone Finder Core
//!
//! Pure logic for the Phone Finder chat assistant: the catalog model,
//! free-text interpretation, conjunctive filtering, and reply shaping.
//!
//! This crate contains no tokio, filesystem I/O, or HTTP dependencies. The
//! application reads the catalog and speaks the transport; everything
//! between "a message arrived" and "here is the reply" lives here.
//!
//! ```text
//! message ──▶ guard ──▶ faq ──▶ intent ──▶ filter ──▶ respond ──▶ payload
//! ```
//!
//! ```rust
//! use phone_finder_core::{Catalog, QueryEngine, ResponseOptions};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"brand": "Samsung", "model": "Galaxy M14", "price": 18000,
//!          "features": ["5G"], "pros": [], "cons": []}]"#,
//! )?;
//! let engine = QueryEngine::new(catalog, ResponseOptions::default())?;
//! let reply = engine.answer("samsung phone under 20000");
//! assert!(reply.payload.text.starts_with("Here's a top pick"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod engine;
pub mod faq;
pub mod filter;
pub mod guard;
pub mod intent;
pub mod models;
pub mod respond;

pub use catalog::Catalog;
pub use engine::QueryEngine;
pub use intent::QueryIntent;
pub use models::{ProductRecord, ResponsePayload, Review, Specs};
pub use respond::{Outcome, Reply, ResponseOptions};
