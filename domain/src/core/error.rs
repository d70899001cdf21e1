//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Blank query or question. Rejected locally, no request is issued.
    #[error("Input cannot be empty")]
    UserInputEmpty,

    #[error("Unknown research category: {0}")]
    UnknownCategory(String),

    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),

    #[error("Project {0} has a negative funding amount")]
    InvalidFunding(String),
}

impl DomainError {
    /// Check if this error represents blank user input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::UserInputEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            DomainError::UserInputEmpty.to_string(),
            "Input cannot be empty"
        );
    }

    #[test]
    fn test_is_empty_input_check() {
        assert!(DomainError::UserInputEmpty.is_empty_input());
        assert!(!DomainError::UnknownCategory("Astrology".to_string()).is_empty_input());
        assert!(!DomainError::DuplicateProject("p1".to_string()).is_empty_input());
        assert!(!DomainError::InvalidFunding("p1".to_string()).is_empty_input());
    }
}
