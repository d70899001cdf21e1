//! Project corpus port
//!
//! The corpus is an external collaborator: an ordered, read-only sequence of
//! projects. The core queries it and never mutates it.

use nexus_domain::{Project, ProjectId};

pub trait ProjectCorpus: Send + Sync {
    /// All projects in corpus order
    fn list(&self) -> &[Project];

    /// Look up one project by id
    fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.list().iter().find(|p| &p.id == id)
    }
}

impl ProjectCorpus for Vec<Project> {
    fn list(&self) -> &[Project] {
        self
    }
}
