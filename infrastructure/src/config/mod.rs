//! Configuration file loading for cure-nexus
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NEXUS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./nexus.toml` or `./.nexus.toml`
//! 4. Global: `$XDG_CONFIG_HOME/cure-nexus/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileCatalogConfig, FileConfig, FileProviderConfig};
pub use loader::{ConfigError, ConfigLoader};
