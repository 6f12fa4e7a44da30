//! Aggregate statistics over a task collection.

use std::collections::BTreeMap;

use serde::Serialize;

/// Counts produced by `TaskManager::summary`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Total number of tasks
    pub total: usize,

    /// Number of completed tasks
    pub completed: usize,

    /// `total - completed`
    pub pending: usize,

    /// Pending tasks past their due date
    pub overdue: usize,

    /// Task count per priority level, only for levels in use
    pub by_priority: BTreeMap<u8, usize>,
}

impl TaskSummary {
    /// Calculate completion percentage
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }

    /// Render as a compact JSON object
    pub fn to_json(&self) -> crate::errors::TasksResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
