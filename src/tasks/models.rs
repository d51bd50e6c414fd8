//! Task model types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status labels written by older versions of the tool, still accepted on load.
pub mod legacy {
    /// Field name used for the status before it was renamed to `status`.
    pub const STATUS_FIELD: &str = "statut";
    /// Legacy label for [`super::Status::Pending`].
    pub const PENDING: &str = "à faire";
    /// Legacy label for [`super::Status::Done`].
    pub const DONE: &str = "terminée";
}

/// Task status.
///
/// The serialized names (`pending`, `done`) are the on-disk contract and must
/// not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Task still has to be done.
    #[default]
    #[serde(alias = "à faire")]
    Pending,
    /// Task has been completed.
    #[serde(alias = "terminée")]
    Done,
}

impl Status {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 2] = [Self::Pending, Self::Done];

    /// Get the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl FromStr for Status {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | legacy::PENDING => Ok(Self::Pending),
            "done" | legacy::DONE => Ok(Self::Done),
            _ => Err(InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid status string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl std::fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
        write!(f, "invalid status: '{}' (must be one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for InvalidStatus {}

/// A task in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within the store.
    pub id: String,
    /// What needs doing. Never empty after trimming.
    pub description: String,
    /// Current status.
    #[serde(alias = "statut")]
    pub status: Status,
}

impl Task {
    /// Create a pending task.
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), description: description.into(), status: Status::Pending }
    }

    /// Check if the task is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}
