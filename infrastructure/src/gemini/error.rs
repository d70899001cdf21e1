//! Error types for the Gemini adapter

use nexus_application::ProviderError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response body: {0}")]
    InvalidBody(String),

    #[error("Response contained no candidates")]
    NoCandidates,

    #[error("Generation stopped without output: {0}")]
    Stopped(String),

    #[error("Answer is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl GeminiError {
    /// Network and service-side failures, as opposed to unusable answers
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GeminiError::ClientBuild(_) | GeminiError::Request(_) | GeminiError::Http { .. }
        )
    }
}

impl From<GeminiError> for ProviderError {
    fn from(error: GeminiError) -> Self {
        if error.is_transport() {
            ProviderError::TransportFailure(error.to_string())
        } else {
            ProviderError::MalformedResponse(error.to_string())
        }
    }
}
