//! Gemini adapter for the provider gateway port

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiGateway, GeminiSettings};
