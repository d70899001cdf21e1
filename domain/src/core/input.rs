//! Validated user input value objects
//!
//! Blank text never reaches the provider: both the search query and the
//! project question are only constructible from non-blank input.

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A donor's free-text search query (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Try to create a query, rejecting blank text
    pub fn try_new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            Err(DomainError::UserInputEmpty)
        } else {
            Ok(Self { text })
        }
    }

    /// Get the raw query text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased copy, used for case-insensitive rule matching
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<&str> for SearchQuery {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        SearchQuery::try_new(s)
    }
}

/// A free-form question about one project (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQuestion {
    content: String,
}

impl ProjectQuestion {
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::UserInputEmpty)
        } else {
            Ok(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ProjectQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
