//! Search Projects use case.
//!
//! Query text → [`QueryIntentExtractor`] → [`Intent`] → [`RelevanceFilter`]
//! over the corpus → [`ResultSet`].
//!
//! [`SearchSession`] adds the UI-facing rules on top: blank input is rejected
//! before anything is issued, and only one search may be in flight.
//!
//! [`Intent`]: nexus_domain::Intent

use crate::ports::progress::{ProgressNotifier, ResultSource};
use crate::ports::project_corpus::ProjectCorpus;
use crate::use_cases::extract_intent::QueryIntentExtractor;
use crate::use_cases::operation_state::OperationState;
use crate::use_cases::shared::{Resolved, lock};
use nexus_domain::{DomainError, Project, ProjectId, RelevanceFilter, ResultSet, SearchQuery};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when submitting a search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid query: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("A search is already in progress")]
    SearchPending,
}

/// Result of one search, borrowing projects from the corpus
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    pub results: ResultSet<'a>,
    /// Whether the intent came from the provider or the local heuristic
    pub intent_source: ResultSource,
}

/// Use case for running one search
pub struct SearchProjectsUseCase {
    extractor: QueryIntentExtractor,
    corpus: Arc<dyn ProjectCorpus>,
}

impl SearchProjectsUseCase {
    pub fn new(extractor: QueryIntentExtractor, corpus: Arc<dyn ProjectCorpus>) -> Self {
        Self { extractor, corpus }
    }

    pub fn corpus(&self) -> &dyn ProjectCorpus {
        self.corpus.as_ref()
    }

    /// Execute the search. Never empty for a non-empty corpus.
    pub async fn execute(
        &self,
        query: &SearchQuery,
        progress: &dyn ProgressNotifier,
    ) -> SearchOutcome<'_> {
        let Resolved {
            value: intent,
            source,
        } = self.extractor.extract(query, progress).await;

        let results = RelevanceFilter::apply(self.corpus.list(), &intent);

        info!(
            "Search matched {} of {} projects (intent from {:?}, broadened: {})",
            results.len(),
            self.corpus.list().len(),
            source,
            results.is_broadened()
        );

        SearchOutcome {
            results,
            intent_source: source,
        }
    }
}

/// Owned snapshot of a displayed result set.
///
/// Holds ids rather than projects; resolve against the corpus to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub query: String,
    pub project_ids: Vec<ProjectId>,
    pub message: String,
    pub broadened: bool,
    pub intent_source: ResultSource,
}

impl SearchSnapshot {
    fn capture(query: &SearchQuery, outcome: &SearchOutcome<'_>) -> Self {
        let results = &outcome.results;
        Self {
            query: query.text().to_string(),
            project_ids: results.projects().iter().map(|p| p.id.clone()).collect(),
            message: results.message().to_string(),
            broadened: results.is_broadened(),
            intent_source: outcome.intent_source,
        }
    }
}

/// Search state behind the search box
pub struct SearchSession {
    use_case: SearchProjectsUseCase,
    state: Mutex<OperationState<SearchSnapshot>>,
}

impl SearchSession {
    pub fn new(use_case: SearchProjectsUseCase) -> Self {
        Self {
            use_case,
            state: Mutex::new(OperationState::Idle),
        }
    }

    /// Whether the submit action should be enabled for this input
    pub fn can_submit(&self, input: &str) -> bool {
        !input.trim().is_empty() && !lock(&self.state).is_pending()
    }

    pub fn state(&self) -> OperationState<SearchSnapshot> {
        lock(&self.state).clone()
    }

    /// Submit raw input.
    ///
    /// Blank input or a search already in flight is rejected without
    /// touching the provider or the displayed results.
    pub async fn submit(
        &self,
        input: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<SearchSnapshot, SearchError> {
        let query = SearchQuery::try_new(input)?;

        {
            let mut state = lock(&self.state);
            if state.is_pending() {
                return Err(SearchError::SearchPending);
            }
            *state = OperationState::Pending;
        }

        let outcome = self.use_case.execute(&query, progress).await;
        let snapshot = SearchSnapshot::capture(&query, &outcome);

        *lock(&self.state) = OperationState::from(Resolved {
            value: snapshot.clone(),
            source: outcome.intent_source,
        });

        Ok(snapshot)
    }

    /// Resolve a snapshot's ids against the corpus, in snapshot order
    pub fn resolve<'a>(&'a self, snapshot: &SearchSnapshot) -> Vec<&'a Project> {
        snapshot
            .project_ids
            .iter()
            .filter_map(|id| self.use_case.corpus().get(id))
            .collect()
    }
}
