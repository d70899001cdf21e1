//! Progress notification port
//!
//! Defines the interface for reporting provider calls while they are in
//! flight, so the presentation layer can show a "thinking" indicator.

use crate::ports::provider_gateway::ProviderErrorKind;

/// The three provider-backed operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    ContentSynthesis,
    QuestionAnswering,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::ContentSynthesis => "content_synthesis",
            Operation::QuestionAnswering => "question_answering",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a delivered value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Provider,
    /// Served from the session cache without a provider call
    Cache,
    /// Deterministic local substitute after a provider failure
    Fallback(ProviderErrorKind),
}

impl ResultSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResultSource::Fallback(_))
    }
}

/// Callback for provider call progress
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called right before the provider is invoked
    fn on_provider_call_start(&self, operation: Operation);

    /// Called once a value is available, from the provider or the fallback
    fn on_provider_call_end(&self, operation: Operation, source: ResultSource);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_provider_call_start(&self, _operation: Operation) {}
    fn on_provider_call_end(&self, _operation: Operation, _source: ResultSource) {}
}
