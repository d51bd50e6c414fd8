//! Error types for `tasklist`.

use crate::tasks::{EmptyDescription, InvalidStatus, TaskNotFound};

/// Errors that can occur while managing the task list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred (configuration file).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A description was empty after trimming.
    #[error(transparent)]
    Validation(#[from] EmptyDescription),

    /// No task matched the given id.
    #[error(transparent)]
    NotFound(#[from] TaskNotFound),

    /// A status string could not be parsed.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),
}

impl Error {
    /// Returns true for errors caused by the caller's input rather than the
    /// environment (validation, unknown ids, bad status names).
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_) | Self::InvalidStatus(_))
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_display_their_cause() {
        let err = Error::from(TaskNotFound("42".to_string()));
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "task not found: 42");

        let err = Error::from(EmptyDescription);
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "description cannot be empty");
    }

    #[test]
    fn test_io_error_is_not_user_error() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert!(!err.is_user_error());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
