//! In-memory project catalog implementing the [`ProjectCorpus`] port

mod featured;
mod loader;

pub use featured::featured_projects;
pub use loader::{CatalogError, load_catalog, parse_json, parse_toml};

use nexus_application::ProjectCorpus;
use nexus_domain::Project;
use std::path::Path;

/// Read-only corpus held in memory, in catalog order
#[derive(Debug, Clone)]
pub struct InMemoryCorpus {
    projects: Vec<Project>,
}

impl InMemoryCorpus {
    /// Build a corpus, rejecting duplicate ids and negative funding
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        loader::validate_catalog(&projects)?;
        Ok(Self { projects })
    }

    pub fn featured() -> Self {
        Self {
            projects: featured_projects(),
        }
    }

    /// The catalog file if given, otherwise the featured catalog
    pub fn from_path(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Ok(Self {
                projects: load_catalog(path)?,
            }),
            None => Ok(Self::featured()),
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectCorpus for InMemoryCorpus {
    fn list(&self) -> &[Project] {
        &self.projects
    }
}
