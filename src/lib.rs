//! # Phone Finder
//!
//! **A conversational phone-finder over a static catalog.**
//!
//! A chat UI sends free-text messages ("samsung phone under 20000", "gaming
//! phone with 5g", "tell me more"); the server interprets each one with
//! keyword and regex heuristics, filters the catalog, and answers with a
//! natural-language reply plus the matching records for card rendering.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────────┐
//! │ phones.json  │──▶│  Catalog (immutable, Arc)    │
//! └──────────────┘   └──────────────┬───────────────┘
//!                                   ▼
//!                    ┌──────────────────────────────┐
//!                    │ QueryEngine (core crate)     │
//!                    │ guard → faq → intent →       │
//!                    │ filter → respond             │
//!                    └──────┬────────────────┬──────┘
//!                           ▼                ▼
//!                     ┌──────────┐     ┌──────────┐
//!                     │   CLI    │     │   HTTP   │
//!                     │  (ask)   │     │ /api/chat│
//!                     └──────────┘     └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! phonefinder catalog                          # list the catalog
//! phonefinder ask "camera phone under 30000"   # one-shot answer with cards
//! phonefinder serve                            # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`catalog`] | Catalog file loading and listing |
//! | [`chat`] | Engine construction and the `ask` command |
//! | [`card`] | Terminal product cards and rupee formatting |
//! | [`server`] | HTTP server (Axum) with CORS |
//!
//! The interpretation and filtering logic lives in [`phone_finder_core`].

pub mod card;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod server;
