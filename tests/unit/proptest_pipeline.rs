//! Property-based tests for the analysis pipeline
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use sprint_health::core::models::{ManualCounts, ReworkBasis, Task};
use sprint_health::core::services::{aggregate, classify, parse_duration, split_line};

use crate::common::process;

fn issue_type() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Story", "Historia", "Bug", "Error", "Hotfix", "Tarea", ""])
        .prop_map(String::from)
}

fn resolution() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Done", "Listo", "Duplicado", "Duplicate", ""]).prop_map(String::from)
}

fn task() -> impl Strategy<Value = Task> {
    ("[A-Z]{3}-[0-9]{1,4}", issue_type(), resolution(), 0u64..200_000, 0u64..200_000).prop_map(
        |(key, issue_type, resolution, estimate, worked)| {
            Task::new(key)
                .with_type(issue_type)
                .with_resolution(resolution)
                .with_times(estimate, worked)
        },
    )
}

proptest! {
    /// "N hours, M minutes" is N*3600 + M*60 seconds
    #[test]
    fn text_duration_matches_formula(hours in 0u64..10_000, minutes in 0u64..60) {
        let raw = format!("{hours} hours, {minutes} minutes");
        prop_assert_eq!(parse_duration(&raw), hours * 3600 + minutes * 60);
    }

    /// Plain integers are taken as seconds
    #[test]
    fn numeric_duration_is_seconds(seconds in 0u64..=u64::from(u32::MAX)) {
        prop_assert_eq!(parse_duration(&seconds.to_string()), seconds);
    }

    /// Quoting every field preserves commas and yields the trimmed values
    #[test]
    fn quoted_fields_survive_splitting(values in prop::collection::vec("[a-zA-Z0-9 ,]{0,12}", 1..8)) {
        let line = values
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(",");
        let expected: Vec<String> = values.iter().map(|v| v.trim().to_string()).collect();

        prop_assert_eq!(split_line(&line), expected);
    }

    /// A task is excluded exactly when the classifier gives a reason
    #[test]
    fn exclusion_follows_classifier(task in task()) {
        let reason = classify(&task);
        let processed = process(task);

        prop_assert_eq!(processed.excluded, reason.is_some());
        prop_assert_eq!(processed.exclusion_reason, reason);
        prop_assert!(!processed.note.is_empty());
        if processed.is_analyzed() {
            prop_assert!(processed.variance.is_some());
        } else {
            prop_assert_eq!(processed.variance_percent.as_str(), "N/A");
        }
    }

    /// Aggregate counts and percentages stay consistent
    #[test]
    fn aggregate_is_consistent(tasks in prop::collection::vec(task(), 0..30)) {
        let processed: Vec<_> = tasks.into_iter().map(process).collect();
        let metrics = aggregate(&processed, ReworkBasis::AllTasks, ManualCounts::observed());

        prop_assert_eq!(metrics.total_tasks, processed.len());
        prop_assert!(metrics.exceeding_tasks <= metrics.analyzed_tasks);
        prop_assert!(metrics.analyzed_tasks + metrics.excluded_tasks <= metrics.total_tasks);
        prop_assert_eq!(
            metrics.within_range_tasks + metrics.exceeding_tasks,
            metrics.analyzed_tasks
        );
        prop_assert!((0.0..=100.0).contains(&metrics.exceeding_percent));
        prop_assert!((0.0..=100.0).contains(&metrics.rework_percent));
        prop_assert!(metrics.rework_minutes <= metrics.total_minutes);
    }
}
