//! Free-text interpretation.
//!
//! [`IntentExtractor`] turns one chat message into a [`QueryIntent`] using
//! fixed vocabularies and a handful of regular expressions. Nothing is
//! learned and nothing carries over between messages.
//!
//! A signal that is absent leaves its field unset, which downstream means
//! "do not filter on this dimension".

use anyhow::{Context, Result};
use regex_lite::Regex;

use crate::faq::{FaqTable, FaqTopic};
use crate::guard::Guard;

/// Supported brands, in match priority order. The first brand found as a
/// substring of the message wins.
pub const BRANDS: &[&str] = &[
    "samsung", "apple", "redmi", "realme", "vivo", "iqoo", "nothing", "google", "oneplus",
];

/// Feature vocabulary. Every word found in the message becomes a required
/// predicate.
pub const FEATURE_KEYWORDS: &[&str] = &[
    "gaming",
    "students",
    "camera",
    "battery",
    "ram",
    "storage",
    "waterproof",
    "5g",
    "budget",
    "photography",
    "amoled",
    "display",
    "charger",
    "performance",
    "compact",
    "lightweight",
];

/// Phrases asking for the full spec sheet of the current matches.
pub const DETAIL_PHRASES: &[&str] = &["i like this phone", "more details", "tell me more"];

const BUDGET_PATTERN: &str =
    r"under\s*₹?\s*([0-9]{3,6})|below\s*₹?\s*([0-9]{3,6})|less than\s*₹?\s*([0-9]{3,6})";
const RAM_PATTERN: &str = r"(\d+)\s*gb ram";
const STORAGE_PATTERN: &str = r"(\d+)\s*gb storage";

/// Structured interpretation of a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryIntent {
    pub is_adversarial: bool,
    pub faq_topic: Option<FaqTopic>,
    /// Lowercase brand name from [`BRANDS`].
    pub brand: Option<&'static str>,
    pub budget_ceiling: Option<u64>,
    /// Matched words from [`FEATURE_KEYWORDS`], in vocabulary order.
    pub wanted_features: Vec<&'static str>,
    /// Requested RAM as the digits typed, leading zeros included.
    pub ram_gb: Option<String>,
    /// Requested storage as the digits typed.
    pub storage_gb: Option<String>,
    pub wants_detail: bool,
}

impl QueryIntent {
    pub fn is_faq_match(&self) -> bool {
        self.faq_topic.is_some()
    }
}

/// Compiled heuristics for building a [`QueryIntent`].
#[derive(Debug, Clone)]
pub struct IntentExtractor {
    guard: Guard,
    faq: FaqTable,
    budget: Regex,
    ram: Regex,
    storage: Regex,
}

impl IntentExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            guard: Guard::new()?,
            faq: FaqTable::builtin()?,
            budget: Regex::new(BUDGET_PATTERN).context("invalid budget pattern")?,
            ram: Regex::new(RAM_PATTERN).context("invalid RAM pattern")?,
            storage: Regex::new(STORAGE_PATTERN).context("invalid storage pattern")?,
        })
    }

    /// Interprets `message`.
    ///
    /// The guard and FAQ stages short-circuit: when either fires, the
    /// returned intent carries only that flag and no filter dimensions.
    pub fn extract(&self, message: &str) -> QueryIntent {
        let text = message.to_lowercase();

        if self.guard.is_adversarial(&text) {
            return QueryIntent {
                is_adversarial: true,
                ..Default::default()
            };
        }

        if let Some(topic) = self.faq.lookup(&text) {
            return QueryIntent {
                faq_topic: Some(topic),
                ..Default::default()
            };
        }

        QueryIntent {
            is_adversarial: false,
            faq_topic: None,
            brand: BRANDS.iter().copied().find(|b| text.contains(b)),
            budget_ceiling: self.budget_ceiling(&text),
            wanted_features: FEATURE_KEYWORDS
                .iter()
                .copied()
                .filter(|w| text.contains(w))
                .collect(),
            ram_gb: first_digits(&self.ram, &text),
            storage_gb: first_digits(&self.storage, &text),
            wants_detail: DETAIL_PHRASES.iter().any(|p| text.contains(p)),
        }
    }

    fn budget_ceiling(&self, text: &str) -> Option<u64> {
        let caps = self.budget.captures(text)?;
        let amount = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3))?;
        // A zero ceiling ("under 000") means no budget was given.
        amount.as_str().parse().ok().filter(|&n: &u64| n > 0)
    }
}

/// Digits of the first capture group of the first match, kept verbatim.
fn first_digits(re: &Regex, text: &str) -> Option<String> {
    Some(re.captures(text)?.get(1)?.as_str().to_string())
}
