//! Domain layer for cure-nexus
//!
//! This crate contains the core types and pure logic of research discovery.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Discovery
//!
//! A donor's free-text query becomes an [`Intent`] (keywords, optional
//! [`Category`], display message). The [`RelevanceFilter`] applies it to the
//! project corpus, preserving corpus order and never returning an empty
//! result for a non-empty corpus.
//!
//! ## Fallback
//!
//! Every provider-backed operation has a deterministic local substitute:
//! [`FallbackIntentHeuristic`] for intents, [`ContentPair::fallback_for`] for
//! descriptions and [`QA_FALLBACK_ANSWER`] for questions.

pub mod content;
pub mod core;
pub mod discovery;
pub mod project;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use content::{
    pair::{AudienceMode, ContentPair},
    qa::{PRESET_QUESTIONS, QA_FALLBACK_ANSWER, QaExchange},
};
pub use crate::core::{
    error::DomainError,
    input::{ProjectQuestion, SearchQuery},
};
pub use discovery::{
    SUGGESTED_QUERIES,
    heuristic::{FallbackIntentHeuristic, IntentRule, NO_MATCH_MESSAGE},
    intent::{DEFAULT_INTENT_MESSAGE, Intent, IntentPayload},
    relevance::{NO_EXACT_MATCH_SUFFIX, RelevanceFilter, ResultSet},
};
pub use project::{
    category::Category,
    entities::{BudgetItem, Project, ProjectId, Researcher},
};
pub use prompt::PromptTemplate;
