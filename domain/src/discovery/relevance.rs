//! Category and keyword filtering over the corpus
//!
//! No scoring: corpus order is preserved. An empty match over a non-empty
//! corpus falls back to the whole corpus with an apologetic suffix.

use super::intent::Intent;
use crate::project::entities::Project;

/// Appended to the intent message when nothing matched
pub const NO_EXACT_MATCH_SUFFIX: &str =
    " We couldn't find an exact match, but here are our most urgent projects.";

/// Projects to display plus the message shown above them.
///
/// Borrows from the corpus. When `broadened` is false and the intent had a
/// category filter, every member has that category.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<'a> {
    projects: Vec<&'a Project>,
    message: String,
    broadened: bool,
}

impl<'a> ResultSet<'a> {
    pub fn projects(&self) -> &[&'a Project] {
        &self.projects
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the filters were discarded because nothing matched
    pub fn is_broadened(&self) -> bool {
        self.broadened
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Applies an [`Intent`] to a corpus
pub struct RelevanceFilter;

impl RelevanceFilter {
    pub fn apply<'a>(corpus: &'a [Project], intent: &Intent) -> ResultSet<'a> {
        let keywords = intent.keywords();

        let filtered: Vec<&Project> = corpus
            .iter()
            .filter(|p| {
                intent
                    .category_filter()
                    .is_none_or(|category| p.category == category)
            })
            .filter(|p| {
                if keywords.is_empty() {
                    return true;
                }
                let text = p.searchable_text();
                keywords.iter().any(|k| text.contains(k.as_str()))
            })
            .collect();

        if filtered.is_empty() && !corpus.is_empty() {
            return ResultSet {
                projects: corpus.iter().collect(),
                message: format!("{}{}", intent.compassionate_response(), NO_EXACT_MATCH_SUFFIX),
                broadened: true,
            };
        }

        ResultSet {
            projects: filtered,
            message: intent.compassionate_response().to_string(),
            broadened: false,
        }
    }
}
