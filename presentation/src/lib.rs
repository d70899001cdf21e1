//! Presentation layer for cure-nexus
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{AudienceArg, Cli, Command, join_query, preset_question};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
