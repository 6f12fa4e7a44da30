//! Task entity and related types.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TaskSnapshot;
use crate::errors::{TasksError, TasksResult};

/// Task priority, 1 (highest urgency) through 5 (lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TaskPriority(u8);

impl TaskPriority {
    pub const HIGHEST: Self = Self(1);
    pub const LOWEST: Self = Self(5);

    /// Validate a raw priority value
    pub fn new(value: i64) -> TasksResult<Self> {
        match u8::try_from(value) {
            Ok(level) if (Self::HIGHEST.0..=Self::LOWEST.0).contains(&level) => Ok(Self(level)),
            _ => Err(TasksError::InvalidPriority { priority: value }),
        }
    }

    /// Raw numeric level
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for TaskPriority {
    type Error = TasksError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> Self {
        priority.0
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cached ordering key of a task.
///
/// Field order is the comparison order: pending before completed, then
/// priority, then due date (undated tasks last), then lowercased title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    completed: bool,
    priority: TaskPriority,
    due_date: NaiveDate,
    title: String,
}

/// A single unit of work.
///
/// Fields are only reachable through accessors so the cached [`SortKey`]
/// always matches them. The one mutation is [`Task::mark_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    completed: bool,
    notes: String,
    sort_key: SortKey,
}

impl Task {
    /// Create a pending task with default priority, no due date and no notes
    pub fn new(title: impl Into<String>) -> TasksResult<Self> {
        Self::builder(title).build()
    }

    /// Start building a task with optional fields
    pub fn builder(title: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    /// Mark the task as completed. Calling it again is a no-op.
    pub fn mark_complete(&mut self) {
        if !self.completed {
            self.completed = true;
            self.refresh_sort_key();
        }
    }

    /// Check if the task is pending with a due date strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Case- and whitespace-insensitive title comparison
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    /// Plain key-value view of the task
    pub fn to_snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::from(self)
    }

    /// Serialize the snapshot as a JSON object
    pub fn to_json(&self) -> TasksResult<String> {
        self.to_snapshot().to_json()
    }

    fn refresh_sort_key(&mut self) {
        self.sort_key = SortKey {
            completed: self.completed,
            priority: self.priority,
            due_date: self.due_date.unwrap_or(NaiveDate::MAX),
            title: self.title.to_lowercase(),
        };
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key
            .cmp(&other.sort_key)
            .then_with(|| self.due_date.cmp(&other.due_date))
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.notes.cmp(&other.notes))
    }
}

/// Builder for [`Task`]; validation happens in [`TaskBuilder::build`]
#[derive(Debug, Clone)]
#[must_use]
pub struct TaskBuilder {
    title: String,
    priority: i64,
    due_date: Option<NaiveDate>,
    completed: bool,
    notes: String,
}

impl TaskBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: i64::from(TaskPriority::default().value()),
            due_date: None,
            completed: false,
            notes: String::new(),
        }
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn maybe_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the fields and produce the task
    pub fn build(self) -> TasksResult<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TasksError::EmptyTitle);
        }
        let priority = TaskPriority::new(self.priority)?;

        let mut task = Task {
            title: title.to_string(),
            priority,
            due_date: self.due_date,
            completed: self.completed,
            notes: self.notes,
            sort_key: SortKey {
                completed: false,
                priority,
                due_date: NaiveDate::MAX,
                title: String::new(),
            },
        };
        task.refresh_sort_key();
        Ok(task)
    }
}
