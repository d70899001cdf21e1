//! Gemini implementation of the [`ProviderGateway`] port.
//!
//! One POST to `{base_url}/v1beta/models/{model}:generateContent` per call.
//! Without a credential the gateway reports [`ProviderError::Unavailable`]
//! and performs no I/O.

use super::error::{GeminiError, Result};
use super::protocol::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use nexus_application::{
    ProviderError, ProviderGateway, ProviderRequest, ResponseShape, StructuredResult,
};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Endpoint and transport settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    /// Transport-level cap; the use cases apply their own bounded wait too
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(12),
        }
    }
}

pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
    api_key: Option<String>,
}

impl GeminiGateway {
    /// Create a gateway. A missing or blank key makes it permanently unavailable.
    pub fn new(settings: GeminiSettings, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(GeminiError::ClientBuild)?;

        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            info!("No provider credential configured; using local fallbacks");
        }

        Ok(Self {
            client,
            settings,
            api_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    async fn send(&self, api_key: &str, request: &ProviderRequest) -> Result<StructuredResult> {
        let body = build_request(request);
        debug!("POST {} ({} prompt bytes)", self.endpoint(), request.prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.describe())
                .unwrap_or_else(|_| {
                    status.canonical_reason().unwrap_or("Unknown").to_string()
                });
            return Err(GeminiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::InvalidBody(e.to_string()))?;
        interpret(&request.shape, &parsed)
    }
}

#[async_trait]
impl ProviderGateway for GeminiGateway {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn invoke(
        &self,
        request: &ProviderRequest,
    ) -> std::result::Result<StructuredResult, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ProviderError::Unavailable);
        };
        self.send(api_key, request).await.map_err(ProviderError::from)
    }
}

pub(crate) fn build_request(request: &ProviderRequest) -> GenerateContentRequest {
    let body = GenerateContentRequest::prompt(request.prompt.clone());
    match &request.shape {
        ResponseShape::Json(schema) => body.with_json_schema(schema.clone()),
        ResponseShape::Text => body,
    }
}

/// Turn a successful response body into the shape the request asked for
pub(crate) fn interpret(
    shape: &ResponseShape,
    response: &GenerateContentResponse,
) -> Result<StructuredResult> {
    let Some(text) = response.text().filter(|t| !t.is_empty()) else {
        return Err(match response.finish_reason() {
            Some(reason) => GeminiError::Stopped(reason.to_string()),
            None => GeminiError::NoCandidates,
        });
    };
    match shape {
        ResponseShape::Json(_) => {
            let value = serde_json::from_str(strip_code_fence(&text))?;
            Ok(StructuredResult::Json(value))
        }
        ResponseShape::Text => Ok(StructuredResult::Text(text)),
    }
}

/// Some models wrap JSON in a markdown fence even in JSON mode
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_application::ProviderErrorKind;
    use serde_json::json;

    fn response(text: &str) -> GenerateContentResponse {
        serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable_without_io() {
        let settings = GeminiSettings {
            // Unroutable: any attempted request would fail as transport
            base_url: "http://127.0.0.1:9".to_string(),
            ..GeminiSettings::default()
        };
        let gateway = GeminiGateway::new(settings, Some("   ".to_string())).unwrap();
        assert!(!gateway.is_available());

        let err = gateway
            .invoke(&ProviderRequest::text("hello"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::Unavailable);
    }

    #[test]
    fn test_endpoint() {
        let settings = GeminiSettings {
            base_url: "https://example.test/".to_string(),
            model: "gemini-test".to_string(),
            ..GeminiSettings::default()
        };
        let gateway = GeminiGateway::new(settings, Some("k".into())).unwrap();
        assert!(gateway.is_available());
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_build_request_follows_shape() {
        let json_req = build_request(&ProviderRequest::json("p", json!({"type": "OBJECT"})));
        assert!(json_req.generation_config.is_some());
        let text_req = build_request(&ProviderRequest::text("p"));
        assert!(text_req.generation_config.is_none());
    }

    #[test]
    fn test_interpret_json_answer() {
        let shape = ResponseShape::Json(json!({}));
        let result = interpret(&shape, &response("{\"keywords\": [\"HIE\"]}")).unwrap();
        assert_eq!(result, StructuredResult::Json(json!({"keywords": ["HIE"]})));
    }

    #[test]
    fn test_interpret_fenced_json() {
        let shape = ResponseShape::Json(json!({}));
        let result = interpret(&shape, &response("```json\n{\"a\": 1}\n```")).unwrap();
        assert_eq!(result, StructuredResult::Json(json!({"a": 1})));
    }

    #[test]
    fn test_interpret_invalid_json_is_malformed() {
        let shape = ResponseShape::Json(json!({}));
        let err: ProviderError = interpret(&shape, &response("Sure! Here you go"))
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
    }

    #[test]
    fn test_interpret_text_answer() {
        let result = interpret(&ResponseShape::Text, &response("It matters.")).unwrap();
        assert_eq!(result, StructuredResult::Text("It matters.".to_string()));
    }

    #[test]
    fn test_interpret_no_candidates() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        let err = interpret(&ResponseShape::Text, &empty).unwrap_err();
        assert!(matches!(err, GeminiError::NoCandidates));
    }

    #[test]
    fn test_interpret_blocked_candidate() {
        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        let err = interpret(&ResponseShape::Text, &blocked).unwrap_err();
        assert!(matches!(err, GeminiError::Stopped(ref reason) if reason == "SAFETY"));
        let err: ProviderError = err.into();
        assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
    }
}
