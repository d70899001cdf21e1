//! Catalog file loading (JSON array or TOML `[[projects]]` tables)

use nexus_domain::{DomainError, Project};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<Project>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let projects = match extension.as_deref() {
        Some("json") => parse_json(&raw)?,
        Some("toml") => parse_toml(&raw)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    info!("Loaded {} projects from {}", projects.len(), path.display());
    Ok(projects)
}

pub fn parse_json(raw: &str) -> Result<Vec<Project>, CatalogError> {
    let projects: Vec<Project> = serde_json::from_str(raw)?;
    validate_catalog(&projects)?;
    Ok(projects)
}

pub fn parse_toml(raw: &str) -> Result<Vec<Project>, CatalogError> {
    let catalog: TomlCatalog = toml::from_str(raw)?;
    validate_catalog(&catalog.projects)?;
    Ok(catalog.projects)
}

/// Unique ids and non-negative funding amounts
pub(crate) fn validate_catalog(projects: &[Project]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(&project.id) {
            return Err(DomainError::DuplicateProject(project.id.to_string()));
        }
        if !project.has_valid_funding() {
            return Err(DomainError::InvalidFunding(project.id.to_string()));
        }
    }
    Ok(())
}
