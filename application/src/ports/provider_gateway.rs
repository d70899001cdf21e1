//! Provider Gateway port
//!
//! Defines the single boundary to the external generative-AI service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Fieldless classification of [`ProviderError`], for state and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    Unavailable,
    TransportFailure,
    MalformedResponse,
}

impl ProviderErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderErrorKind::Unavailable => "unavailable",
            ProviderErrorKind::TransportFailure => "transport_failure",
            ProviderErrorKind::MalformedResponse => "malformed_response",
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during a provider invocation.
///
/// Never shown to the end user: callers consume them immediately and serve
/// their deterministic fallback instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No credential configured. Expected, detected before any request.
    #[error("Provider unavailable: no credential configured")]
    Unavailable,

    /// Network or service-side failure (timeout, 5xx, rate limiting)
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The service answered but the body did not fit the response shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            ProviderError::Unavailable => ProviderErrorKind::Unavailable,
            ProviderError::TransportFailure(_) => ProviderErrorKind::TransportFailure,
            ProviderError::MalformedResponse(_) => ProviderErrorKind::MalformedResponse,
        }
    }
}

/// Expected shape of the provider's answer
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// A JSON document following the given schema
    Json(Value),
    /// Plain text, no schema
    Text,
}

/// One outbound provider request
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub prompt: String,
    pub shape: ResponseShape,
}

impl ProviderRequest {
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            shape: ResponseShape::Json(schema),
        }
    }

    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            shape: ResponseShape::Text,
        }
    }
}

/// Parsed provider answer, matching the request's [`ResponseShape`]
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredResult {
    Json(Value),
    Text(String),
}

impl StructuredResult {
    /// Deserialize a JSON answer into `T`.
    ///
    /// A text answer or a JSON value of the wrong shape is
    /// [`ProviderError::MalformedResponse`].
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ProviderError> {
        match self {
            StructuredResult::Json(value) => serde_json::from_value(value)
                .map_err(|e| ProviderError::MalformedResponse(e.to_string())),
            StructuredResult::Text(_) => Err(ProviderError::MalformedResponse(
                "expected a JSON document, got plain text".to_string(),
            )),
        }
    }

    /// Take a non-blank text answer
    pub fn into_text(self) -> Result<String, ProviderError> {
        let text = match self {
            StructuredResult::Text(text) => text,
            StructuredResult::Json(Value::String(text)) => text,
            StructuredResult::Json(other) => other.to_string(),
        };
        if text.trim().is_empty() {
            return Err(ProviderError::MalformedResponse(
                "empty text response".to_string(),
            ));
        }
        Ok(text)
    }
}

/// Gateway to the generative-AI provider
///
/// Implementations (adapters) live in the infrastructure layer. Each call to
/// [`invoke`](ProviderGateway::invoke) issues at most one outbound request
/// and never retries; retry policy belongs to the caller.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Whether a credential is configured. When false, `invoke` fails with
    /// [`ProviderError::Unavailable`] without touching the network.
    fn is_available(&self) -> bool;

    /// Send one prompt and parse the answer into the requested shape
    async fn invoke(&self, request: &ProviderRequest) -> Result<StructuredResult, ProviderError>;
}
