//! Task records
//!
//! A [`Task`] is one normalized row of the export. A [`ProcessedTask`] embeds
//! it together with the derived hours, the variance verdict and the
//! exclusion state.

use serde::Serialize;

use super::ExclusionReason;

/// Seconds in one hour
const SECONDS_PER_HOUR: f64 = 3600.0;

/// A normalized issue row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Issue key (e.g., "APISNG-111"), never empty
    pub key: String,
    /// Issue summary
    pub summary: String,
    /// Issue type as exported (e.g., "Historia", "Bug")
    #[serde(rename = "type")]
    pub issue_type: String,
    /// Assignee display name
    pub assignee: String,
    /// Original estimate in seconds
    pub estimate_seconds: u64,
    /// Logged work in seconds
    pub worked_seconds: u64,
    /// Workflow status
    pub status: String,
    /// Resolution (e.g., "Finalizada", "Duplicado")
    pub resolution: String,
    /// Priority name
    pub priority: String,
    /// Creation date, verbatim
    pub created: String,
    /// Last update date, verbatim
    pub updated: String,
    /// Reporter display name
    pub reporter: String,
}

impl Task {
    /// Create a task with only a key set
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Set the issue type
    #[must_use]
    pub fn with_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    /// Set the resolution
    #[must_use]
    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = resolution.into();
        self
    }

    /// Set estimate and worked time, in seconds
    #[must_use]
    pub const fn with_times(mut self, estimate_seconds: u64, worked_seconds: u64) -> Self {
        self.estimate_seconds = estimate_seconds;
        self.worked_seconds = worked_seconds;
        self
    }

    /// Original estimate in hours
    #[must_use]
    pub fn estimate_hours(&self) -> f64 {
        seconds_to_hours(self.estimate_seconds)
    }

    /// Logged work in hours
    #[must_use]
    pub fn worked_hours(&self) -> f64 {
        seconds_to_hours(self.worked_seconds)
    }
}

#[allow(clippy::cast_precision_loss)]
fn seconds_to_hours(seconds: u64) -> f64 {
    seconds as f64 / SECONDS_PER_HOUR
}

/// Status marker shown next to each task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIcon {
    /// Deviation within the allowed range
    Pass,
    /// Deviation outside the allowed range (or exactly at the limit)
    Fail,
    /// Worked time logged without an original estimate
    Warning,
    /// Left out of the deviation indicator
    Excluded,
}

impl StatusIcon {
    /// Symbol used in human output
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
            Self::Warning => "⚠️",
            Self::Excluded => "🚫",
        }
    }
}

impl std::fmt::Display for StatusIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
            Self::Warning => write!(f, "warning"),
            Self::Excluded => write!(f, "excluded"),
        }
    }
}

/// A task with its deviation verdict
///
/// Built once per [`Task`] by the variance evaluator and never updated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedTask {
    /// The normalized task
    #[serde(flatten)]
    pub task: Task,
    /// Original estimate in hours
    pub estimate_hours: f64,
    /// Logged work in hours
    pub worked_hours: f64,
    /// Signed deviation in percent, when computed
    pub variance: Option<f64>,
    /// Formatted deviation (`+16.7%`, `-5.0%`) or `N/A`
    pub variance_percent: String,
    /// Whether the absolute deviation is within the threshold
    pub within_threshold: bool,
    /// Whether the task is left out of the deviation indicator
    pub excluded: bool,
    /// Why the task was excluded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_reason: Option<ExclusionReason>,
    /// Status marker
    pub status_icon: StatusIcon,
    /// Human-readable explanation of the verdict
    pub note: String,
}

impl ProcessedTask {
    /// Whether the task counts toward the deviation indicator
    #[must_use]
    pub fn is_analyzed(&self) -> bool {
        !self.excluded && self.estimate_hours > 0.0
    }

    /// Whether the task is analyzed and outside the threshold
    #[must_use]
    pub fn is_exceeding(&self) -> bool {
        self.is_analyzed() && !self.within_threshold
    }
}
