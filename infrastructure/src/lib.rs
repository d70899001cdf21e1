//! Infrastructure layer for cure-nexus
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use catalog::{CatalogError, InMemoryCorpus, featured_projects};
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig,
    FileProviderConfig,
};
pub use gemini::{GeminiError, GeminiGateway, GeminiSettings};
