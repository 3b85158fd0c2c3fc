//! Task builder - turns one data row into a [`Task`]

use crate::core::models::{ColumnMap, Field, Task};

use super::duration::parse_duration;

/// Build a task from a data row
///
/// Returns `None` when the row has no key; such rows (blank trailers,
/// truncated lines) are not part of the dataset.
#[must_use]
pub fn build_task(row: &[String], columns: &ColumnMap) -> Option<Task> {
    let text = |field: Field| clean(columns.get(row, field));

    let key = text(Field::Key);
    if key.is_empty() {
        return None;
    }

    Some(Task {
        key,
        summary: text(Field::Summary),
        issue_type: text(Field::Type),
        assignee: text(Field::Assignee),
        estimate_seconds: parse_duration(&text(Field::EstimateSeconds)),
        worked_seconds: parse_duration(&text(Field::WorkedSeconds)),
        status: text(Field::Status),
        resolution: text(Field::Resolution),
        priority: text(Field::Priority),
        created: text(Field::Created),
        updated: text(Field::Updated),
        reporter: text(Field::Reporter),
    })
}

/// Drop stray quote characters the tokenizer left behind
fn clean(value: &str) -> String {
    value.replace('"', "").trim().to_string()
}
