//! Error types for the tasklist crate.

use thiserror::Error;

/// Errors raised by task construction, lookup and configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TasksError {
    // Validation errors
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Invalid priority {priority}: must be between 1 (highest) and 5 (lowest)")]
    InvalidPriority { priority: i64 },

    // Lookup errors
    #[error("No pending task found with title '{title}'")]
    TaskNotFound { title: String },

    #[error("Task '{title}' is already completed")]
    AlreadyCompleted { title: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },
}

impl TasksError {
    /// True for errors raised while validating a task's fields
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle | Self::InvalidPriority { .. })
    }

    /// True when no pending task matched a lookup
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::AlreadyCompleted { .. }
        )
    }

    /// Short stable label (snake_case) for logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::InvalidPriority { .. } => "invalid_priority",
            Self::TaskNotFound { .. } => "task_not_found",
            Self::AlreadyCompleted { .. } => "already_completed",
            Self::ConfigError { .. } => "config_error",
            Self::JsonParseError { .. } => "json_parse_error",
        }
    }
}

impl From<serde_json::Error> for TasksError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for tasklist operations
pub type TasksResult<T> = Result<T, TasksError>;
