//! Analysis settings passed into the pipeline
//!
//! These are plain values; reading them from a file is the job of
//! [`crate::config`].

use serde::{Deserialize, Serialize};

use super::AliasTable;

/// Deviation limits used by the variance evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VarianceThresholds {
    /// Largest absolute deviation still within range, in percent
    pub deviation_percent: f64,
    /// Absolute deviation above which the overrun is called significant
    pub significant_percent: f64,
    /// Absolute deviation below which the estimate counts as exact
    pub exact_tolerance_percent: f64,
}

impl Default for VarianceThresholds {
    fn default() -> Self {
        Self {
            deviation_percent: 25.0,
            significant_percent: 50.0,
            exact_tolerance_percent: 0.1,
        }
    }
}

/// Population used as the rework indicator's denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReworkBasis {
    /// Worked time of every task, rework tasks included
    #[default]
    AllTasks,
    /// Worked time of tasks that are not bug-type (hotfixes included)
    NonBugTasks,
}

impl std::fmt::Display for ReworkBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllTasks => write!(f, "all-tasks"),
            Self::NonBugTasks => write!(f, "non-bug-tasks"),
        }
    }
}

impl std::str::FromStr for ReworkBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all-tasks" | "all" => Ok(Self::AllTasks),
            "non-bug-tasks" | "non-bug" => Ok(Self::NonBugTasks),
            _ => Err(format!("Invalid rework basis: {s}. Use: all-tasks, non-bug-tasks")),
        }
    }
}

/// Counts for the reprogrammed and testing-failure indicators
///
/// An issue export carries no sprint-change or testing history, so these
/// have to come from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManualCounts {
    /// Tasks moved to a later sprint
    pub reprogrammed_tasks: u32,
    /// Tasks that stayed in the sprint
    pub final_tasks: u32,
    /// Tasks sent back to development after testing
    pub testing_failed_tasks: u32,
    /// Tasks that went through testing
    pub testing_total_tasks: u32,
}

impl ManualCounts {
    /// The fixed figures the original dashboard displayed (6/19 and 7/19)
    ///
    /// Not derived from any data; used only when nothing else is supplied.
    #[must_use]
    pub const fn observed() -> Self {
        Self {
            reprogrammed_tasks: 6,
            final_tasks: 19,
            testing_failed_tasks: 7,
            testing_total_tasks: 19,
        }
    }
}

/// Everything the pipeline needs besides the CSV text
#[derive(Debug, Clone, Default)]
pub struct AnalysisSettings {
    /// Deviation limits
    pub thresholds: VarianceThresholds,
    /// Rework denominator
    pub rework_basis: ReworkBasis,
    /// Indicator 2 and 4 counts; `None` falls back to [`ManualCounts::observed`]
    pub manual_counts: Option<ManualCounts>,
    /// Header aliases
    pub aliases: AliasTable,
}
