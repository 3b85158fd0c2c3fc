//! Task builder tests

use sprint_health::core::models::{AliasTable, ColumnMap, Field};
use sprint_health::core::services::{build_task, resolve_columns, split_line};

use crate::common::{ENGLISH_HEADER, row};

fn english_columns() -> ColumnMap {
    resolve_columns(&split_line(ENGLISH_HEADER), &AliasTable::new())
}

#[test]
fn test_build_task_reads_every_field() {
    let columns = english_columns();
    let line = row("API-7", "Story", "Done", "3 hours", "12600");

    let task = build_task(&split_line(&line), &columns).unwrap();

    assert_eq!(task.key, "API-7");
    assert_eq!(task.issue_type, "Story");
    assert_eq!(task.summary, "Work on API-7, part 1");
    assert_eq!(task.assignee, "Ana Ruiz");
    assert_eq!(task.reporter, "Luis Gil");
    assert_eq!(task.priority, "Medium");
    assert_eq!(task.status, "Done");
    assert_eq!(task.resolution, "Done");
    assert_eq!(task.created, "2024-03-01 09:00");
    assert_eq!(task.updated, "2024-03-08 17:30");
    assert_eq!(task.estimate_seconds, 10800);
    assert_eq!(task.worked_seconds, 12600);
}

#[test]
fn test_row_without_key_is_skipped() {
    let columns = english_columns();
    let line = row("", "Story", "Done", "3600", "3600");

    assert!(build_task(&split_line(&line), &columns).is_none());
}

#[test]
fn test_unresolved_key_column_skips_every_row() {
    let columns = resolve_columns(&split_line("Summary,Time Spent"), &AliasTable::new());
    assert!(build_task(&split_line("Something,3600"), &columns).is_none());
}

#[test]
fn test_short_row_leaves_fields_empty() {
    let columns = english_columns();
    let task = build_task(&split_line("Bug,API-9"), &columns).unwrap();

    assert_eq!(task.key, "API-9");
    assert_eq!(task.issue_type, "Bug");
    assert_eq!(task.summary, "");
    assert_eq!(task.estimate_seconds, 0);
    assert_eq!(task.worked_seconds, 0);
}

#[test]
fn test_stray_quotes_are_removed() {
    let mut columns = ColumnMap::unresolved();
    columns.insert(Field::Key, 0, "Key");
    columns.insert(Field::Summary, 1, "Summary");

    let raw = vec!["API-3".to_string(), "a \"quoted\" word".to_string()];
    let task = build_task(&raw, &columns).unwrap();

    assert_eq!(task.summary, "a quoted word");
}

#[test]
fn test_hours_are_derived_from_seconds() {
    let columns = english_columns();
    let line = row("API-8", "Task", "", "5400", "\"1 hour, 30 minutes\"");
    let task = build_task(&split_line(&line), &columns).unwrap();

    assert!((task.estimate_hours() - 1.5).abs() < f64::EPSILON);
    assert!((task.worked_hours() - 1.5).abs() < f64::EPSILON);
}
