//! Currently selected project.
//!
//! Every selection bumps a generation counter. Work started for one selection
//! carries a [`SelectionTicket`]; when it completes, the ticket is compared
//! against the tracker to decide whether the result may still be displayed.

use crate::use_cases::shared::lock;
use nexus_domain::ProjectId;
use std::sync::Mutex;

/// Proof of which selection an in-flight operation belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    project_id: ProjectId,
    generation: u64,
}

impl SelectionTicket {
    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Default)]
struct SelectionInner {
    current: Option<ProjectId>,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct SelectionTracker {
    inner: Mutex<SelectionInner>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a project, invalidating every earlier ticket
    pub fn select(&self, project_id: ProjectId) -> SelectionTicket {
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.current = Some(project_id.clone());
        SelectionTicket {
            project_id,
            generation: inner.generation,
        }
    }

    pub fn clear(&self) {
        let mut inner = lock(&self.inner);
        inner.generation += 1;
        inner.current = None;
    }

    pub fn current(&self) -> Option<ProjectId> {
        lock(&self.inner).current.clone()
    }

    /// True only if no selection happened since the ticket was issued
    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        let inner = lock(&self.inner);
        inner.generation == ticket.generation && inner.current.as_ref() == Some(&ticket.project_id)
    }

    /// True if the given project is the one on screen, regardless of
    /// how many times it was reselected
    pub fn shows(&self, project_id: &ProjectId) -> bool {
        lock(&self.inner).current.as_ref() == Some(project_id)
    }
}
