//! Core data structures for task tracking.

mod config;
mod snapshot;
mod summary;
mod task;

pub use config::{TasksConfig, DEFAULT_PRIORITY_ENV, LOG_LEVEL_ENV};
pub use snapshot::TaskSnapshot;
pub use summary::TaskSummary;
pub use task::{SortKey, Task, TaskBuilder, TaskPriority};
