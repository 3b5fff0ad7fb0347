//! Canned answers to educational questions.
//!
//! Each topic is an independent pattern → answer pair. Topics are tried in
//! table order and the first match wins; a matching message never reaches
//! the catalog.

use anyhow::{Context, Result};
use regex_lite::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqTopic {
    ImageStabilization,
}

impl FaqTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaqTopic::ImageStabilization => "image_stabilization",
        }
    }

    pub fn answer(&self) -> &'static str {
        match self {
            FaqTopic::ImageStabilization => IMAGE_STABILIZATION_ANSWER,
        }
    }
}

pub const IMAGE_STABILIZATION_ANSWER: &str = "OIS (Optical Image Stabilization) is hardware-based and helps keep photos sharp by physically moving the lens. EIS (Electronic Image Stabilization) uses software to reduce video shake. OIS is great for low-light photos. Want phones with OIS? Just ask!";

/// `(topic, pattern)` in priority order. Patterns are case-insensitive.
const TOPICS: &[(FaqTopic, &str)] = &[(
    FaqTopic::ImageStabilization,
    r"(?i)ois.*eis|eis.*ois|optical.*electronic|electronic.*optical",
)];

#[derive(Debug, Clone)]
struct FaqEntry {
    topic: FaqTopic,
    pattern: Regex,
}

/// The compiled FAQ table.
#[derive(Debug, Clone)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    /// Compiles the built-in topics.
    pub fn builtin() -> Result<Self> {
        let entries = TOPICS
            .iter()
            .map(|&(topic, pattern)| {
                let pattern = Regex::new(pattern)
                    .with_context(|| format!("invalid FAQ pattern for {}", topic.as_str()))?;
                Ok(FaqEntry { topic, pattern })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// First topic whose pattern matches `text`.
    pub fn lookup(&self, text: &str) -> Option<FaqTopic> {
        self.entries
            .iter()
            .find(|e| e.pattern.is_match(text))
            .map(|e| e.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_either_order() {
        let faq = FaqTable::builtin().unwrap();
        for text in [
            "what is ois vs eis",
            "EIS or OIS, which is better?",
            "optical vs electronic stabilization",
            "is electronic as good as optical?",
        ] {
            assert_eq!(
                faq.lookup(text),
                Some(FaqTopic::ImageStabilization),
                "{text}"
            );
        }
    }

    #[test]
    fn test_no_match() {
        let faq = FaqTable::builtin().unwrap();
        assert_eq!(faq.lookup("samsung under 20000"), None);
        assert_eq!(faq.lookup("does it have ois?"), None);
    }

    #[test]
    fn test_answer_text() {
        let answer = FaqTopic::ImageStabilization.answer();
        assert!(answer.starts_with("OIS (Optical Image Stabilization)"));
    }
}
