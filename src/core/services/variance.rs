//! Variance evaluator - per-task deviation between estimate and worked time

use crate::core::models::{ExclusionReason, ProcessedTask, StatusIcon, Task, VarianceThresholds};

/// Marker used when no deviation is computed
pub const NOT_APPLICABLE: &str = "N/A";

const NO_ESTIMATE_NOTE: &str = "No original estimate provided";

/// Where an absolute deviation falls relative to the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceBand {
    /// Below the exact-estimate tolerance
    Exact,
    /// Within the allowed deviation
    Within,
    /// Exactly on the allowed deviation
    AtLimit,
    /// Above the allowed deviation, up to the significant limit
    Exceeds,
    /// Above the significant limit
    Significant,
}

impl VarianceBand {
    /// Band for an absolute deviation in percent
    ///
    /// A deviation exactly on the limit is still within the threshold but
    /// gets its own band, reported with a failing icon.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn of(abs_variance: f64, thresholds: &VarianceThresholds) -> Self {
        if abs_variance < thresholds.exact_tolerance_percent {
            Self::Exact
        } else if abs_variance == thresholds.deviation_percent {
            Self::AtLimit
        } else if abs_variance <= thresholds.deviation_percent {
            Self::Within
        } else if abs_variance > thresholds.significant_percent {
            Self::Significant
        } else {
            Self::Exceeds
        }
    }

    /// Icon shown for this band
    #[must_use]
    pub const fn icon(self) -> StatusIcon {
        match self {
            Self::Exact | Self::Within => StatusIcon::Pass,
            Self::AtLimit | Self::Exceeds | Self::Significant => StatusIcon::Fail,
        }
    }

    /// Note explaining this band
    #[must_use]
    pub fn note(self, thresholds: &VarianceThresholds) -> String {
        let limit = thresholds.deviation_percent;
        match self {
            Self::Exact => "Exact estimate".to_string(),
            Self::Within => "Within acceptable range".to_string(),
            Self::AtLimit => format!("Exactly at the {limit}% limit"),
            Self::Exceeds => format!("Exceeds the permitted {limit}%"),
            Self::Significant => format!("Significantly exceeds {limit}%"),
        }
    }
}

/// Signed deviation of worked time from the estimate, in percent
///
/// The estimate must be positive.
#[must_use]
pub fn variance_percent(estimate_hours: f64, worked_hours: f64) -> f64 {
    (worked_hours - estimate_hours) / estimate_hours * 100.0
}

/// Format a deviation with one decimal and an explicit `+` when not negative
#[must_use]
pub fn format_variance(variance: f64) -> String {
    if variance >= 0.0 {
        format!("+{variance:.1}%")
    } else {
        format!("{variance:.1}%")
    }
}

/// Evaluate a classified task
///
/// `exclusion` is the classifier's verdict for this task.
#[must_use]
pub fn evaluate(
    task: Task,
    exclusion: Option<ExclusionReason>,
    thresholds: &VarianceThresholds,
) -> ProcessedTask {
    let estimate_hours = task.estimate_hours();
    let worked_hours = task.worked_hours();

    let mut processed = ProcessedTask {
        task,
        estimate_hours,
        worked_hours,
        variance: None,
        variance_percent: NOT_APPLICABLE.to_string(),
        within_threshold: false,
        excluded: exclusion.is_some(),
        exclusion_reason: exclusion,
        status_icon: StatusIcon::Excluded,
        note: String::new(),
    };

    if let Some(reason) = exclusion {
        processed.note = reason.message().to_string();
        return processed;
    }

    if estimate_hours <= 0.0 {
        processed.status_icon = StatusIcon::Warning;
        processed.note = NO_ESTIMATE_NOTE.to_string();
        return processed;
    }

    let variance = variance_percent(estimate_hours, worked_hours);
    let band = VarianceBand::of(variance.abs(), thresholds);

    processed.variance = Some(variance);
    processed.variance_percent = format_variance(variance);
    processed.within_threshold = variance.abs() <= thresholds.deviation_percent;
    processed.status_icon = band.icon();
    processed.note = band.note(thresholds);
    processed
}
