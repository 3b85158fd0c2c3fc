//! End-to-end pipeline tests

use sprint_health::core::models::{
    AliasTable, AnalysisSettings, ExclusionReason, Field, ManualCounts, ReworkBasis, StatusIcon,
};
use sprint_health::core::services::inspect_columns;
use sprint_health::run_pipeline;

use crate::common::{english_csv, row, sprint_csv};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_sample_sprint() {
    let output = run_pipeline(&sprint_csv(), &AnalysisSettings::default());
    let metrics = output.metrics;

    assert_eq!(metrics.total_tasks, 4);
    assert_eq!(metrics.analyzed_tasks, 3);
    assert_eq!(metrics.exceeding_tasks, 2);
    assert_eq!(metrics.within_range_tasks, 1);
    assert_eq!(metrics.excluded_tasks, 1);
    assert!(close(metrics.exceeding_percent, 200.0 / 3.0));
    assert!(close(metrics.rework_minutes, 0.0));
    assert!(close(metrics.total_minutes, 1410.0));
    assert!(close(metrics.rework_percent, 0.0));
}

#[test]
fn test_sample_sprint_tasks_in_csv_order() {
    let output = run_pipeline(&sprint_csv(), &AnalysisSettings::default());
    let keys: Vec<&str> = output.tasks.iter().map(|t| t.task.key.as_str()).collect();

    assert_eq!(keys, ["APISNG-111", "APISNG-87", "APISNG-27", "APISNG-88"]);

    let percents: Vec<&str> = output.tasks.iter().map(|t| t.variance_percent.as_str()).collect();
    assert_eq!(percents, ["+16.7%", "+33.3%", "+100.0%", "N/A"]);

    let duplicate = &output.tasks[3];
    assert_eq!(duplicate.exclusion_reason, Some(ExclusionReason::Duplicate));
    assert_eq!(duplicate.status_icon, StatusIcon::Excluded);
    assert_eq!(output.tasks[0].task.summary, "Paginar listado de pedidos, v2");
}

#[test]
fn test_placeholder_counts_when_not_supplied() {
    let output = run_pipeline(&sprint_csv(), &AnalysisSettings::default());

    assert!(!output.manual_counts_supplied);
    assert_eq!(output.metrics.reprogrammed_tasks, 6);
    assert_eq!(output.metrics.final_tasks, 19);
    assert!(close(output.metrics.reprogrammed_percent, 24.0));
    assert!(close(output.metrics.testing_failed_percent, 7.0 / 19.0 * 100.0));
}

#[test]
fn test_supplied_counts_are_used() {
    let settings = AnalysisSettings {
        manual_counts: Some(ManualCounts {
            reprogrammed_tasks: 1,
            final_tasks: 3,
            testing_failed_tasks: 0,
            testing_total_tasks: 10,
        }),
        ..AnalysisSettings::default()
    };
    let output = run_pipeline(&sprint_csv(), &settings);

    assert!(output.manual_counts_supplied);
    assert!(close(output.metrics.reprogrammed_percent, 25.0));
    assert!(close(output.metrics.testing_failed_percent, 0.0));
}

#[test]
fn test_english_export_with_text_durations() {
    let csv = english_csv(&[
        row("WEB-1", "Story", "Done", "\"3 hours, 30 minutes\"", "\"3 hours, 30 minutes\""),
        row("WEB-2", "Bug", "Done", "3600", "\"2 hours\""),
        row("WEB-3", "Hotfix", "Done", "\"1 hour\"", "\"1 hour, 30 minutes\""),
    ]);
    let output = run_pipeline(&csv, &AnalysisSettings::default());
    let metrics = output.metrics;

    assert_eq!(metrics.total_tasks, 3);
    assert_eq!(metrics.excluded_tasks, 1);
    assert_eq!(metrics.analyzed_tasks, 2);
    assert_eq!(metrics.exceeding_tasks, 1);
    // bug 120 + hotfix 90 out of 420
    assert!(close(metrics.rework_minutes, 210.0));
    assert!(close(metrics.total_minutes, 420.0));
    assert!(close(metrics.rework_percent, 50.0));
}

#[test]
fn test_non_bug_rework_basis() {
    let csv = english_csv(&[
        row("WEB-1", "Story", "Done", "7200", "7200"),
        row("WEB-2", "Bug", "Done", "3600", "3600"),
    ]);
    let settings = AnalysisSettings {
        rework_basis: ReworkBasis::NonBugTasks,
        ..AnalysisSettings::default()
    };
    let metrics = run_pipeline(&csv, &settings).metrics;

    assert!(close(metrics.total_minutes, 120.0));
    assert!(close(metrics.rework_percent, 50.0));
}

#[test]
fn test_rows_without_key_are_dropped() {
    let csv = english_csv(&[
        row("WEB-1", "Story", "Done", "3600", "3600"),
        row("", "Story", "Done", "3600", "3600"),
        ",,,".to_string(),
    ]);
    let output = run_pipeline(&csv, &AnalysisSettings::default());

    assert_eq!(output.metrics.total_tasks, 1);
}

#[test]
fn test_crlf_and_bom_input() {
    let csv = format!("\u{feff}{}", sprint_csv().replace('\n', "\r\n"));
    let output = run_pipeline(&csv, &AnalysisSettings::default());

    assert_eq!(output.metrics.analyzed_tasks, 3);
    assert_eq!(output.tasks[3].task.worked_seconds, 0);
    assert!(output.columns.missing().is_empty());
}

#[test]
fn test_empty_input() {
    let output = run_pipeline("", &AnalysisSettings::default());

    assert!(output.tasks.is_empty());
    assert_eq!(output.metrics.total_tasks, 0);
    assert!(close(output.metrics.exceeding_percent, 0.0));
    assert_eq!(output.columns.missing().len(), Field::COUNT);
}

#[test]
fn test_header_only() {
    let output = run_pipeline(crate::common::SPANISH_HEADER, &AnalysisSettings::default());

    assert!(output.tasks.is_empty());
    assert!(output.columns.missing().is_empty());
}

#[test]
fn test_unrecognized_header_yields_no_tasks() {
    let output = run_pipeline("Foo,Bar\n1,2\n3,4\n", &AnalysisSettings::default());

    assert!(output.tasks.is_empty());
    assert!(!output.columns.is_resolved(Field::Key));
}

#[test]
fn test_extra_alias_rescues_unknown_header() {
    let csv = "Clé,Type,Original Estimate,Time Spent\nFR-1,Story,3600,3600\n";
    let settings = AnalysisSettings {
        aliases: AliasTable::new().with_alias(Field::Key, "Clé"),
        ..AnalysisSettings::default()
    };
    let output = run_pipeline(csv, &settings);

    assert_eq!(output.tasks.len(), 1);
    assert_eq!(output.tasks[0].task.key, "FR-1");
}

#[test]
fn test_inspect_columns() {
    let (header, columns) = inspect_columns(&sprint_csv(), &AliasTable::new());

    assert_eq!(header.len(), 13);
    assert_eq!(header[1], "Clave de incidencia");
    assert_eq!(columns.index(Field::Key), Some(1));
}

#[test]
fn test_inspect_columns_on_empty_input() {
    let (header, columns) = inspect_columns("", &AliasTable::new());

    assert!(header.is_empty());
    assert!(!columns.is_resolved(Field::Key));
}
