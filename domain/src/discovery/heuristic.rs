//! Local intent extraction used when the provider cannot answer.
//!
//! A static rule table matched by case-insensitive substring. The first
//! matching rule wins; rule order is significant.

use super::intent::Intent;
use crate::core::input::SearchQuery;
use crate::project::category::Category;

/// Message used when no rule matches
pub const NO_MATCH_MESSAGE: &str = "We found these projects that might interest you.";

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    /// Lowercase substrings; any one of them triggers the rule
    pub triggers: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub category: Option<Category>,
    pub message: &'static str,
}

impl IntentRule {
    fn matches(&self, lowercase_text: &str) -> bool {
        self.triggers.iter().any(|t| lowercase_text.contains(t))
    }

    fn to_intent(self) -> Intent {
        Intent::new(self.message)
            .with_keywords(self.keywords)
            .with_category(self.category)
    }
}

/// Built-in rules, in evaluation order
pub const DEFAULT_RULES: &[IntentRule] = &[
    IntentRule {
        triggers: &["hie", "hypoxic"],
        keywords: &["HIE", "hypothermia"],
        category: None,
        message: "Searching for HIE treatments is critical. Here are researchers working on neuroprotection.",
    },
    IntentRule {
        triggers: &["down syndrome"],
        keywords: &["Down Syndrome"],
        category: None,
        message: "Improving cognition in Down Syndrome is a major frontier. These labs are leading the way.",
    },
    IntentRule {
        triggers: &["gene"],
        keywords: &[],
        category: Some(Category::GeneTherapy),
        message: "Gene therapy offers hope for root-cause cures. Here are our active gene editing protocols.",
    },
];

/// Deterministic substitute for provider-based intent extraction
#[derive(Debug, Clone, Copy)]
pub struct FallbackIntentHeuristic {
    rules: &'static [IntentRule],
}

impl Default for FallbackIntentHeuristic {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES,
        }
    }
}

impl FallbackIntentHeuristic {
    /// Derive an intent from the query. Pure: same text, same intent.
    pub fn extract(&self, query: &SearchQuery) -> Intent {
        let text = query.lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&text))
            .map(|rule| rule.to_intent())
            .unwrap_or_else(|| Intent::new(NO_MATCH_MESSAGE))
    }
}
