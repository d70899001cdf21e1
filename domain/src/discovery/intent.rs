//! Structured interpretation of a search query

use crate::project::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Message shown when the provider returns an intent without one
pub const DEFAULT_INTENT_MESSAGE: &str = "Here are the projects we found.";

/// Keywords, optional category and display message for one search.
///
/// Created per search and dropped once the result set is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intent {
    keywords: BTreeSet<String>,
    category_filter: Option<Category>,
    compassionate_response: String,
}

impl Intent {
    pub fn new(compassionate_response: impl Into<String>) -> Self {
        Self {
            keywords: BTreeSet::new(),
            category_filter: None,
            compassionate_response: compassionate_response.into(),
        }
    }

    /// Add keywords. Stored lowercased; blank entries are dropped.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords.extend(
            keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty()),
        );
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category_filter = category;
        self
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn category_filter(&self) -> Option<Category> {
        self.category_filter
    }

    pub fn compassionate_response(&self) -> &str {
        &self.compassionate_response
    }
}

/// Intent as returned by the provider.
///
/// Every field is optional on the wire; [`IntentPayload::into_intent`]
/// normalizes it into an [`Intent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPayload {
    #[serde(default)]
    pub compassionate_response: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub category_filter: Option<String>,
}

impl IntentPayload {
    /// Convert to an [`Intent`]. An out-of-set category is treated as absent.
    pub fn into_intent(self) -> Intent {
        let message = self
            .compassionate_response
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INTENT_MESSAGE.to_string());

        let category = self.category_filter.as_deref().and_then(Category::coerce);

        Intent::new(message)
            .with_keywords(self.keywords.unwrap_or_default())
            .with_category(category)
    }
}
