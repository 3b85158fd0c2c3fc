//! Classifier - decides which tasks stay out of the deviation indicator
//!
//! Excluded tasks are not dropped: bug-type tasks in particular are the
//! population of the rework indicator.

use crate::core::models::{ExclusionReason, Task};

/// Resolution markers for duplicates (Spanish and English exports)
pub const DUPLICATE_MARKERS: &[&str] = &["duplicado", "duplicate"];

/// Issue-type markers that exclude a task as bug work
pub const BUG_TYPE_MARKERS: &[&str] = &["bug", "error", "defecto"];

/// Issue-type markers that count a task's time as rework
///
/// Wider than [`BUG_TYPE_MARKERS`]: hotfixes are rework but still go
/// through the deviation analysis.
pub const REWORK_TYPE_MARKERS: &[&str] = &["bug", "error", "defecto", "hotfix"];

/// Case-insensitive check for any marker in a field
#[must_use]
pub fn contains_any(value: &str, markers: &[&str]) -> bool {
    let value = value.to_lowercase();
    markers.iter().any(|marker| value.contains(marker))
}

/// Whether the task's resolution marks it as a duplicate
#[must_use]
pub fn is_duplicate(task: &Task) -> bool {
    contains_any(&task.resolution, DUPLICATE_MARKERS)
}

/// Whether the task's type is bug work
#[must_use]
pub fn is_bug_type(task: &Task) -> bool {
    contains_any(&task.issue_type, BUG_TYPE_MARKERS)
}

/// Whether the task's worked time counts as rework
#[must_use]
pub fn is_rework_type(task: &Task) -> bool {
    contains_any(&task.issue_type, REWORK_TYPE_MARKERS)
}

/// Classify a task
///
/// Returns the first applicable reason, checked in the order duplicate, no
/// time data, bug type. `None` means the task is analyzed.
#[must_use]
pub fn classify(task: &Task) -> Option<ExclusionReason> {
    if is_duplicate(task) {
        Some(ExclusionReason::Duplicate)
    } else if task.estimate_seconds == 0 && task.worked_seconds == 0 {
        Some(ExclusionReason::NoTimeData)
    } else if is_bug_type(task) {
        Some(ExclusionReason::BugType)
    } else {
        None
    }
}
