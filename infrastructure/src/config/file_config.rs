//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiSettings};
use nexus_application::DiscoveryParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Generative AI provider configuration (`[provider]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "API_KEY")
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Bounded wait per provider call
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 12,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the credential from the config or the process environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Direct key first, then the named env var. Blank values count as absent.
    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        let non_blank = |v: String| (!v.trim().is_empty()).then_some(v);

        if let Some(key) = self.api_key.clone().and_then(non_blank) {
            return Some(key);
        }
        if self.api_key_env.trim().is_empty() {
            return None;
        }
        lookup(&self.api_key_env).and_then(non_blank)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn to_gemini_settings(&self) -> GeminiSettings {
        GeminiSettings {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout: self.timeout(),
        }
    }

    pub fn to_discovery_params(&self) -> DiscoveryParams {
        DiscoveryParams::default().with_provider_timeout(self.timeout())
    }
}

/// Project catalog configuration (`[catalog]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// JSON or TOML catalog; the built-in featured catalog if unset
    pub path: Option<PathBuf>,
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
    pub catalog: FileCatalogConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.provider.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        Ok(())
    }
}
