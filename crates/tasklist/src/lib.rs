#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Tasklist
//!
//! In-memory task tracking for CLIs, web APIs and automation scripts that
//! need task semantics without a storage layer.
//!
//! This crate provides:
//! - Validated task construction with priorities 1 (highest) to 5 (lowest)
//! - A manager that keeps tasks ordered so actionable work comes first
//! - Overdue detection and aggregate summaries
//! - JSON snapshots of tasks and summaries
//! - Terminal table rendering helpers
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tasklist::{Task, TaskManager};
//!
//! let mut manager = TaskManager::new();
//! manager.create_task("Write docs")?;
//! manager.create_task_with(
//!     Task::builder("Submit report")
//!         .priority(1)
//!         .due_date(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()),
//! )?;
//!
//! let done = manager.complete_task("write docs")?;
//! assert!(done.is_completed());
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! assert_eq!(manager.get_overdue(today).len(), 1);
//! assert_eq!(manager.summary_as_of(today).pending, 1);
//! # Ok::<(), tasklist::TasksError>(())
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Domain facades
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::TaskManager;
pub use entities::{
    SortKey, Task, TaskBuilder, TaskPriority, TaskSnapshot, TaskSummary, TasksConfig,
};
pub use errors::{TasksError, TasksResult};
