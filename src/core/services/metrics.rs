//! Metrics aggregator - reduces processed tasks to [`SprintMetrics`]

use crate::core::models::{ManualCounts, ProcessedTask, ReworkBasis, SprintMetrics};

use super::classifier::{is_bug_type, is_rework_type};

/// `numerator / denominator` in percent, 0 when the denominator is not positive
#[must_use]
pub fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn count_percent(numerator: usize, denominator: usize) -> f64 {
    ratio_percent(numerator as f64, denominator as f64)
}

/// Worked minutes on rework tasks and in the chosen denominator
///
/// Hotfixes are rework but not bug work, so under
/// [`ReworkBasis::NonBugTasks`] they count on both sides of the ratio.
#[must_use]
pub fn rework_time(tasks: &[ProcessedTask], basis: ReworkBasis) -> (f64, f64) {
    let mut rework = 0.0;
    let mut all = 0.0;
    let mut non_bug = 0.0;

    for processed in tasks {
        let minutes = processed.worked_hours * 60.0;
        all += minutes;
        if is_rework_type(&processed.task) {
            rework += minutes;
        }
        if !is_bug_type(&processed.task) {
            non_bug += minutes;
        }
    }

    let total = match basis {
        ReworkBasis::AllTasks => all,
        ReworkBasis::NonBugTasks => non_bug,
    };
    (rework, total)
}

/// Aggregate the four indicators
#[must_use]
pub fn aggregate(tasks: &[ProcessedTask], basis: ReworkBasis, counts: ManualCounts) -> SprintMetrics {
    let analyzed_tasks = tasks.iter().filter(|t| t.is_analyzed()).count();
    let exceeding_tasks = tasks.iter().filter(|t| t.is_exceeding()).count();
    let excluded_tasks = tasks.iter().filter(|t| t.excluded).count();

    let (rework_minutes, total_minutes) = rework_time(tasks, basis);

    let reprogrammed = f64::from(counts.reprogrammed_tasks);
    let reprogrammed_percent = ratio_percent(reprogrammed, reprogrammed + f64::from(counts.final_tasks));

    SprintMetrics {
        total_tasks: tasks.len(),
        analyzed_tasks,
        exceeding_tasks,
        exceeding_percent: count_percent(exceeding_tasks, analyzed_tasks),
        within_range_tasks: analyzed_tasks - exceeding_tasks,
        excluded_tasks,
        reprogrammed_tasks: counts.reprogrammed_tasks,
        final_tasks: counts.final_tasks,
        reprogrammed_percent,
        rework_minutes,
        total_minutes,
        rework_percent: ratio_percent(rework_minutes, total_minutes),
        testing_failed_tasks: counts.testing_failed_tasks,
        testing_total_tasks: counts.testing_total_tasks,
        testing_failed_percent: ratio_percent(
            f64::from(counts.testing_failed_tasks),
            f64::from(counts.testing_total_tasks),
        ),
    }
}
