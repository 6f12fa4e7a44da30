//! Integration tests for the task manager.
//!
//! These walk the public API the way an embedding CLI or service would:
//! seed tasks, complete them by title, and read back listings and summaries.

use chrono::{Duration, NaiveDate};
use tasklist::{Task, TaskManager, TasksError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title().to_string()).collect()
}

mod ordering_tests {
    use super::*;

    #[test]
    fn test_task_ordering_and_listing() {
        init_tracing();
        let mut manager = TaskManager::new();
        manager
            .create_task_with(Task::builder("Low priority").priority(5))
            .unwrap();
        manager
            .create_task_with(Task::builder("High priority").priority(1))
            .unwrap();
        manager
            .create_task_with(Task::builder("Medium priority").priority(3))
            .unwrap();

        assert_eq!(
            titles(&manager.list_tasks(false)),
            vec!["High priority", "Medium priority", "Low priority"]
        );
    }

    #[test]
    fn test_listing_is_sorted_and_pending_first() {
        init_tracing();
        let base = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut manager = TaskManager::new();
        let specs = [
            ("gamma", 2, Some(3), false),
            ("Alpha", 2, None, false),
            ("beta", 2, Some(3), false),
            ("delta", 1, None, true),
            ("epsilon", 4, Some(-2), false),
            ("zeta", 5, Some(10), true),
            ("eta", 1, Some(1), false),
        ];
        for (title, priority, offset, completed) in specs {
            let builder = Task::builder(title)
                .priority(priority)
                .maybe_due_date(offset.map(|days| base + Duration::days(days)))
                .completed(completed);
            manager.add_task(builder.build().unwrap());
        }

        let listed = manager.list_tasks(true);
        assert_eq!(listed.len(), manager.len());
        assert!(listed
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key()));

        let first_completed = listed
            .iter()
            .position(|t| t.is_completed())
            .unwrap_or(listed.len());
        assert!(listed[first_completed..].iter().all(|t| t.is_completed()));

        assert_eq!(
            titles(&listed),
            vec!["eta", "beta", "gamma", "Alpha", "epsilon", "delta", "zeta"]
        );
    }
}

mod completion_tests {
    use super::*;

    #[test]
    fn test_complete_task_updates_state() {
        init_tracing();
        let mut manager = TaskManager::new();
        manager.create_task("Write docs").unwrap();
        manager.create_task("Ship release").unwrap();

        let completed = manager.complete_task("write docs").unwrap();
        assert!(completed.is_completed());
        assert_eq!(completed.title(), "Write docs");

        let err = manager.complete_task("WRITE DOCS").unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, TasksError::AlreadyCompleted { .. }));
    }

    #[test]
    fn test_complete_task_ignores_case_and_whitespace() {
        init_tracing();
        let mut manager = TaskManager::new();
        manager.create_task("Plan Roadmap").unwrap();

        let completed = manager.complete_task("\t plan roadmap  ").unwrap();
        assert_eq!(completed.title(), "Plan Roadmap");
        assert_eq!(manager.list_tasks(false).len(), 0);
        assert_eq!(manager.list_tasks(true).len(), 1);
    }

    #[test]
    fn test_returned_task_is_detached() {
        init_tracing();
        let mut manager = TaskManager::new();
        let mut handle = manager.create_task("Detached").unwrap();

        handle.mark_complete();
        assert!(handle.is_completed());
        assert_eq!(manager.summary().completed, 0);
        assert!(manager.complete_task("Detached").is_ok());
    }
}

mod overdue_tests {
    use super::*;

    fn seeded(today: NaiveDate) -> TaskManager {
        TaskManager::with_tasks(vec![
            Task::builder("Submit report")
                .due_date(today - Duration::days(1))
                .build()
                .unwrap(),
            Task::builder("Plan roadmap").priority(2).build().unwrap(),
            Task::builder("Team sync")
                .priority(2)
                .completed(true)
                .due_date(today - Duration::days(2))
                .build()
                .unwrap(),
        ])
    }

    #[test]
    fn test_overdue_and_summary() {
        init_tracing();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let manager = seeded(today);

        let overdue = manager.get_overdue(today);
        assert_eq!(titles(&overdue), vec!["Submit report"]);

        let summary = manager.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.by_priority.get(&2), Some(&2));
        assert_eq!(summary.by_priority.get(&3), Some(&1));
        assert_eq!(summary.by_priority.values().sum::<usize>(), summary.total);
    }

    #[test]
    fn test_summary_json_contract() {
        init_tracing();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let manager = seeded(today);

        assert_eq!(
            manager.summary_as_of(today).to_json().unwrap(),
            r#"{"total":3,"completed":1,"pending":2,"overdue":1,"by_priority":{"2":2,"3":1}}"#
        );
    }

    #[test]
    fn test_overdue_excludes_undated_and_completed() {
        init_tracing();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let manager = seeded(today);

        let far_future = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
        let overdue = manager.get_overdue(far_future);
        assert_eq!(titles(&overdue), vec!["Submit report"]);
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_task_validation() {
        assert!(Task::new("   ").unwrap_err().is_validation());
        assert!(Task::builder("x")
            .priority(0)
            .build()
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_titles_are_trimmed_in_snapshot() {
        for raw in ["Write docs", "  Write docs", "Write docs\n", "\tWrite docs  "] {
            let task = Task::new(raw).unwrap();
            assert_eq!(task.to_snapshot().title, "Write docs");
        }
    }
}
