//! Validation errors raised when user input cannot become a task.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Raised by `TaskStore::add` when the title is blank after trimming.
    #[error("Task title must not be empty")]
    EmptyTitle,

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown priority '{0}'")]
    UnknownPriority(String),

    #[error("Unknown view mode '{0}'")]
    UnknownViewMode(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Task title must not be empty");
        assert_eq!(
            ValidationError::InvalidDate("2025-13-01".into()).to_string(),
            "Invalid date '2025-13-01', expected YYYY-MM-DD"
        );
    }
}
