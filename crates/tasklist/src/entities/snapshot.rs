//! Plain key-value snapshot of a task.

use serde::Serialize;

use super::Task;
use crate::errors::TasksResult;

/// Serializable view of a [`Task`].
///
/// Field order is the output key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSnapshot {
    pub title: String,
    pub priority: u8,
    /// ISO-8601 `YYYY-MM-DD`
    pub due_date: Option<String>,
    pub completed: bool,
    pub notes: String,
}

impl TaskSnapshot {
    /// Render as a compact JSON object
    pub fn to_json(&self) -> TasksResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as an indented JSON object
    pub fn to_json_pretty(&self) -> TasksResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Task> for TaskSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title().to_string(),
            priority: task.priority().value(),
            due_date: task
                .due_date()
                .map(|due| due.format("%Y-%m-%d").to_string()),
            completed: task.is_completed(),
            notes: task.notes().to_string(),
        }
    }
}
