//! One-shot chat from the command line (`phonefinder ask`).

use anyhow::{Context, Result};
use phone_finder_core::QueryEngine;

use crate::card::render_card;
use crate::catalog::load_catalog;
use crate::config::Config;

/// Builds the engine from config: reads the catalog once and applies the
/// `[responses]` options.
pub fn build_engine(config: &Config) -> Result<QueryEngine> {
    let catalog = load_catalog(config)?;
    QueryEngine::new(catalog, config.responses.to_options())
        .context("Failed to initialize query engine")
}

/// Answers `message` and prints the reply, either as text plus cards or as
/// the raw JSON payload.
pub fn run_ask(config: &Config, message: &str, json: bool) -> Result<()> {
    let engine = build_engine(config)?;
    let reply = engine.answer(message);
    tracing::debug!(
        outcome = reply.outcome.as_str(),
        matches = reply.match_count,
        "answered"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&reply.payload)?);
        return Ok(());
    }

    println!("{}", reply.payload.text);
    for phone in &reply.payload.matched_records {
        println!();
        println!("{}", render_card(phone));
    }

    Ok(())
}
