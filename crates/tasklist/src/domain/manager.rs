//! Task manager facade.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::entities::{Task, TaskBuilder, TaskPriority, TaskSummary, TasksConfig};
use crate::errors::{TasksError, TasksResult};

/// Ordered, in-memory collection of tasks.
///
/// The collection is sorted by [`Task::sort_key`] after every mutation;
/// tasks with equal keys keep their insertion order. Mutating operations
/// hand back copies of the stored task, so all changes go through the
/// manager.
#[derive(Debug, Clone, Default)]
pub struct TaskManager {
    tasks: Vec<Task>,
    default_priority: TaskPriority,
}

impl TaskManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager using `config` for defaults
    pub fn with_config(config: &TasksConfig) -> TasksResult<Self> {
        config.validate()?;
        Ok(Self {
            tasks: Vec::new(),
            default_priority: config.priority()?,
        })
    }

    /// Create a manager seeded with `tasks`, added one at a time
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut manager = Self::new();
        manager.extend(tasks);
        manager
    }

    /// Number of stored tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks in sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Builder seeded with the configured default priority
    pub fn task_builder(&self, title: impl Into<String>) -> TaskBuilder {
        Task::builder(title).priority(i64::from(self.default_priority.value()))
    }

    /// Store a task and return a copy of the stored value
    pub fn add_task(&mut self, task: Task) -> Task {
        // Equivalent to append + stable sort: land after every equal key.
        let index = self
            .tasks
            .partition_point(|existing| existing.sort_key() <= task.sort_key());
        self.tasks.insert(index, task);

        let stored = &self.tasks[index];
        debug!(
            title = %stored.title(),
            priority = %stored.priority(),
            position = index,
            total = self.tasks.len(),
            "Task added"
        );
        stored.clone()
    }

    /// Create a task with the default priority and store it
    pub fn create_task(&mut self, title: impl Into<String>) -> TasksResult<Task> {
        self.create_task_with(self.task_builder(title))
    }

    /// Validate a fully specified task and store it
    pub fn create_task_with(&mut self, builder: TaskBuilder) -> TasksResult<Task> {
        let task = builder.build()?;
        Ok(self.add_task(task))
    }

    /// List tasks in sorted order, optionally hiding completed ones
    pub fn list_tasks(&self, include_completed: bool) -> Vec<&Task> {
        let tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| include_completed || !t.is_completed())
            .collect();
        debug!(include_completed, count = tasks.len(), "Listing tasks");
        tasks
    }

    /// Mark the first pending task whose title matches as complete.
    ///
    /// Matching ignores case and surrounding whitespace. The collection is
    /// left untouched when no pending task matches.
    pub fn complete_task(&mut self, title: &str) -> TasksResult<Task> {
        let Some(index) = self
            .tasks
            .iter()
            .position(|t| !t.is_completed() && t.title_matches(title))
        else {
            let err = if self.tasks.iter().any(|t| t.title_matches(title)) {
                TasksError::AlreadyCompleted {
                    title: title.trim().to_string(),
                }
            } else {
                TasksError::TaskNotFound {
                    title: title.trim().to_string(),
                }
            };
            debug!(title, error = err.as_label(), "No pending task to complete");
            return Err(err);
        };

        self.tasks[index].mark_complete();
        let completed = self.tasks[index].clone();
        self.sort();

        info!(title = %completed.title(), "Task completed");
        Ok(completed)
    }

    /// Pending tasks with a due date strictly before `today`
    pub fn get_overdue(&self, today: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_overdue(today)).collect()
    }

    /// [`TaskManager::get_overdue`] against the local current date
    pub fn get_overdue_today(&self) -> Vec<&Task> {
        self.get_overdue(today())
    }

    /// Aggregate statistics, counting overdue tasks against the local date
    pub fn summary(&self) -> TaskSummary {
        self.summary_as_of(today())
    }

    /// Aggregate statistics with overdue tasks counted against `today`
    pub fn summary_as_of(&self, today: NaiveDate) -> TaskSummary {
        let mut summary = TaskSummary {
            total: self.tasks.len(),
            overdue: self.get_overdue(today).len(),
            ..TaskSummary::default()
        };

        for task in &self.tasks {
            if task.is_completed() {
                summary.completed += 1;
            }
            *summary
                .by_priority
                .entry(task.priority().value())
                .or_insert(0) += 1;
        }
        summary.pending = summary.total - summary.completed;
        summary
    }

    fn sort(&mut self) {
        self.tasks.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Extend<Task> for TaskManager {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.add_task(task);
        }
    }
}

impl FromIterator<Task> for TaskManager {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::with_tasks(iter)
    }
}

impl<'a> IntoIterator for &'a TaskManager {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
