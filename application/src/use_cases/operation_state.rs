//! Lifecycle of one asynchronous operation as seen by the UI.
//!
//! One enum per operation instead of separate loading flags, so states like
//! "loading and showing a result" cannot be represented.

use super::shared::Resolved;
use crate::ports::progress::ResultSource;
use crate::ports::provider_gateway::ProviderErrorKind;

/// Fieldless view of [`OperationState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperationState<T> {
    Idle,
    Pending,
    Succeeded(T),
    /// The provider failed; `fallback` is what is displayed instead
    Failed { fallback: T, error: ProviderErrorKind },
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        OperationState::Idle
    }
}

impl<T> OperationState<T> {
    pub fn status(&self) -> OperationStatus {
        match self {
            OperationState::Idle => OperationStatus::Idle,
            OperationState::Pending => OperationStatus::Pending,
            OperationState::Succeeded(_) => OperationStatus::Succeeded,
            OperationState::Failed { .. } => OperationStatus::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OperationState::Pending)
    }

    /// The displayable value, whether from the provider or the fallback
    pub fn value(&self) -> Option<&T> {
        match self {
            OperationState::Succeeded(value) => Some(value),
            OperationState::Failed { fallback, .. } => Some(fallback),
            OperationState::Idle | OperationState::Pending => None,
        }
    }
}

impl<T> From<Resolved<T>> for OperationState<T> {
    fn from(resolved: Resolved<T>) -> Self {
        match resolved.source {
            ResultSource::Provider | ResultSource::Cache => OperationState::Succeeded(resolved.value),
            ResultSource::Fallback(error) => OperationState::Failed {
                fallback: resolved.value,
                error,
            },
        }
    }
}
