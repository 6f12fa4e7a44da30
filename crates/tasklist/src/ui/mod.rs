//! Terminal rendering helpers for embedding CLIs.
//!
//! Everything here returns strings or tables; printing is left to the caller.

use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{Task, TaskPriority, TaskSummary};

/// Get colored status string
pub fn status_colored(task: &Task, today: NaiveDate) -> String {
    if task.is_completed() {
        "done".green().to_string()
    } else if task.is_overdue(today) {
        "overdue".red().bold().to_string()
    } else {
        "pending".yellow().to_string()
    }
}

/// Get colored priority string
pub fn priority_colored(priority: TaskPriority) -> String {
    let label = format!("P{priority}");
    match priority.value() {
        1 => label.red().bold().to_string(),
        2 => label.yellow().to_string(),
        3 => label.normal().to_string(),
        _ => label.dimmed().to_string(),
    }
}

fn priority_color(priority: TaskPriority) -> Color {
    match priority.value() {
        1 => Color::Red,
        2 => Color::Yellow,
        3 => Color::White,
        _ => Color::DarkGrey,
    }
}

/// Create a table for displaying tasks
pub fn task_table(tasks: &[&Task], today: NaiveDate) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Due").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Notes").fg(Color::Cyan),
    ]);

    for task in tasks {
        let (status, status_color) = if task.is_completed() {
            ("done", Color::Green)
        } else if task.is_overdue(today) {
            ("overdue", Color::Red)
        } else {
            ("pending", Color::Yellow)
        };

        let due = task
            .due_date()
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());

        let notes = if task.notes().is_empty() {
            "-"
        } else {
            task.notes()
        };

        table.add_row(vec![
            Cell::new(task.title()),
            Cell::new(task.priority()).fg(priority_color(task.priority())),
            Cell::new(due),
            Cell::new(status).fg(status_color),
            Cell::new(notes),
        ]);
    }

    table
}

/// Create a two-column table for a summary
pub fn summary_table(summary: &TaskSummary) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Metric").fg(Color::Cyan),
        Cell::new("Count").fg(Color::Cyan),
    ]);

    table.add_row(vec![Cell::new("Total"), Cell::new(summary.total)]);
    table.add_row(vec![
        Cell::new("Completed"),
        Cell::new(summary.completed).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Pending"),
        Cell::new(summary.pending).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Overdue"),
        Cell::new(summary.overdue).fg(Color::Red),
    ]);

    for (priority, count) in &summary.by_priority {
        table.add_row(vec![Cell::new(format!("Priority {priority}")), Cell::new(count)]);
    }

    table
}

/// One-line description of a task, e.g. for log output or confirmations
pub fn task_line(task: &Task, today: NaiveDate) -> String {
    let mut line = format!(
        "{} {} [{}]",
        priority_colored(task.priority()),
        task.title(),
        status_colored(task, today)
    );
    if let Some(due) = task.due_date() {
        line.push_str(&format!(" (due: {})", due.format("%Y-%m-%d")));
    }
    line
}
