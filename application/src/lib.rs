//! Application layer for cure-nexus
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_PROVIDER_TIMEOUT, DiscoveryParams};
pub use ports::{
    progress::{NoProgress, Operation, ProgressNotifier, ResultSource},
    project_corpus::ProjectCorpus,
    provider_gateway::{
        ProviderError, ProviderErrorKind, ProviderGateway, ProviderRequest, ResponseShape,
        StructuredResult,
    },
};
pub use use_cases::answer_question::ConversationalQa;
pub use use_cases::extract_intent::QueryIntentExtractor;
pub use use_cases::operation_state::{OperationState, OperationStatus};
pub use use_cases::project_detail::{DetailView, ProjectDetailSession, QaError};
pub use use_cases::search_projects::{
    SearchError, SearchOutcome, SearchProjectsUseCase, SearchSession, SearchSnapshot,
};
pub use use_cases::selection::{SelectionTicket, SelectionTracker};
pub use use_cases::shared::{Resolved, call_with_fallback};
pub use use_cases::synthesize_content::ContentSynthesizer;
