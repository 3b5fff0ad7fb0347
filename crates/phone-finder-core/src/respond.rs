//! Reply shaping.
//!
//! Picks exactly one reply shape for an interpreted message, in priority
//! order:
//!
//! 1. guard refusal
//! 2. FAQ answer
//! 3. detail dump (or "no matching phone found for details")
//! 4. not found
//! 5. single top pick
//! 6. summary of several matches
//!
//! [`shape`] is pure: the same intent over the same records always yields
//! the same payload.

use crate::filter::filter_records;
use crate::guard::REFUSAL;
use crate::intent::QueryIntent;
use crate::models::{ProductRecord, ResponsePayload};

pub const NO_DETAILS: &str = "Sorry, no matching phone found for details.";
pub const NOT_FOUND: &str = "Sorry, no phones found matching your criteria. Try increasing your budget or changing requirements.";

/// Shaping knobs, decoupled from application config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseOptions {
    /// How many names a summary reply lists.
    pub summary_limit: usize,
    /// Cap on records attached to summary and detail replies. `None`
    /// attaches every match.
    pub max_cards: Option<usize>,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            summary_limit: 5,
            max_cards: None,
        }
    }
}

/// Which terminal shape a reply took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Refused,
    Faq,
    Details,
    NoDetails,
    NotFound,
    TopPick,
    Summary,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Refused => "refused",
            Outcome::Faq => "faq",
            Outcome::Details => "details",
            Outcome::NoDetails => "no_details",
            Outcome::NotFound => "not_found",
            Outcome::TopPick => "top_pick",
            Outcome::Summary => "summary",
        }
    }
}

/// A shaped reply together with the shape it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub outcome: Outcome,
    /// Number of records that passed the filter (before any card cap).
    pub match_count: usize,
    pub payload: ResponsePayload,
}

impl Reply {
    fn text_only(outcome: Outcome, match_count: usize, text: impl Into<String>) -> Self {
        Self {
            outcome,
            match_count,
            payload: ResponsePayload::text(text),
        }
    }
}

pub fn shape(intent: &QueryIntent, records: &[ProductRecord], options: &ResponseOptions) -> Reply {
    if intent.is_adversarial {
        return Reply::text_only(Outcome::Refused, 0, REFUSAL);
    }

    if let Some(topic) = intent.faq_topic {
        return Reply::text_only(Outcome::Faq, 0, topic.answer());
    }

    let matched = filter_records(records, intent);
    let count = matched.len();

    if intent.wants_detail {
        if matched.is_empty() {
            return Reply::text_only(Outcome::NoDetails, 0, NO_DETAILS);
        }
        let text = matched
            .iter()
            .map(|p| detail_block(p))
            .collect::<Vec<_>>()
            .join("\n\n");
        return Reply {
            outcome: Outcome::Details,
            match_count: count,
            payload: ResponsePayload::with_records(text, attach(&matched, options)),
        };
    }

    match matched.as_slice() {
        [] => Reply::text_only(Outcome::NotFound, 0, NOT_FOUND),
        [top] => Reply {
            outcome: Outcome::TopPick,
            match_count: 1,
            payload: ResponsePayload::with_records(
                format!(
                    "Here's a top pick: {} (₹{}), features: {}.",
                    top.display_name(),
                    top.price,
                    top.features.join(", ")
                ),
                vec![(*top).clone()],
            ),
        },
        _ => {
            let names = matched
                .iter()
                .take(options.summary_limit)
                .map(|p| format!("{} (₹{})", p.display_name(), p.price))
                .collect::<Vec<_>>()
                .join(", ");
            Reply {
                outcome: Outcome::Summary,
                match_count: count,
                payload: ResponsePayload::with_records(
                    format!("Here are some matches: {}", names),
                    attach(&matched, options),
                ),
            }
        }
    }
}

fn attach(matched: &[&ProductRecord], options: &ResponseOptions) -> Vec<ProductRecord> {
    let cap = options.max_cards.unwrap_or(matched.len());
    matched.iter().take(cap).map(|p| (*p).clone()).collect()
}

/// Full spec sheet for one record.
fn detail_block(p: &ProductRecord) -> String {
    let specs = p.specs.clone().unwrap_or_default();
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());

    let mut out = format!("{} (₹{})\n", p.display_name(), p.price);
    out.push_str(&format!("Display: {}\n", field(&specs.display)));
    out.push_str(&format!("Processor: {}\n", field(&specs.processor)));
    out.push_str(&format!("Camera: {}\n", field(&specs.camera)));
    out.push_str(&format!("Battery: {}\n", field(&specs.battery)));
    out.push_str(&format!("RAM: {}\n", field(&specs.ram)));
    out.push_str(&format!("Storage: {}\n", field(&specs.storage)));
    for (key, value) in &specs.other {
        out.push_str(&format!("{}: {}\n", key, value));
    }
    out.push_str(&format!("Features: {}\n", p.features.join(", ")));
    out.push_str(&format!("Pros: {}\n", p.pros.join(", ")));
    out.push_str(&format!("Cons: {}\n", p.cons.join(", ")));
    out
}
