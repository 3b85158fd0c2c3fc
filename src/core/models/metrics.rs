//! Sprint-level indicators

use serde::{Deserialize, Serialize};

/// Aggregate snapshot over one sprint's processed tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintMetrics {
    /// Every task with a key
    pub total_tasks: usize,
    /// Non-excluded tasks with an estimate
    pub analyzed_tasks: usize,
    /// Analyzed tasks outside the deviation threshold
    pub exceeding_tasks: usize,
    /// `exceeding_tasks / analyzed_tasks`, in percent
    pub exceeding_percent: f64,
    /// Analyzed tasks within the deviation threshold
    pub within_range_tasks: usize,
    /// Tasks left out of the deviation indicator
    pub excluded_tasks: usize,
    /// Tasks moved to a later sprint
    pub reprogrammed_tasks: u32,
    /// Tasks that stayed in the sprint
    pub final_tasks: u32,
    /// `reprogrammed / (reprogrammed + final)`, in percent
    pub reprogrammed_percent: f64,
    /// Worked minutes on rework tasks
    pub rework_minutes: f64,
    /// Worked minutes in the rework denominator
    pub total_minutes: f64,
    /// `rework_minutes / total_minutes`, in percent
    pub rework_percent: f64,
    /// Tasks sent back after testing
    pub testing_failed_tasks: u32,
    /// Tasks that went through testing
    pub testing_total_tasks: u32,
    /// `testing_failed / testing_total`, in percent
    pub testing_failed_percent: f64,
}

/// The four sprint-health indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    /// Tasks whose worked time deviates more than the threshold
    TimeDeviation,
    /// Tasks moved to a later sprint
    Reprogrammed,
    /// Time spent fixing defects
    Rework,
    /// Tasks that failed testing
    TestingFailure,
}

impl Indicator {
    /// All indicators, in report order
    pub const ALL: [Self; 4] = [
        Self::TimeDeviation,
        Self::Reprogrammed,
        Self::Rework,
        Self::TestingFailure,
    ];

    /// Short title for reports
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TimeDeviation => "Time deviation",
            Self::Reprogrammed => "Reprogrammed tasks",
            Self::Rework => "Rework time",
            Self::TestingFailure => "Testing failures",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Upper bound for each indicator, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorTargets {
    /// Time-deviation target
    pub deviation: f64,
    /// Reprogrammed-task target
    pub reprogrammed: f64,
    /// Rework-time target
    pub rework: f64,
    /// Testing-failure target
    pub testing_failure: f64,
}

impl Default for IndicatorTargets {
    fn default() -> Self {
        Self {
            deviation: 25.0,
            reprogrammed: 12.0,
            rework: 5.0,
            testing_failure: 15.0,
        }
    }
}

impl IndicatorTargets {
    /// Target for one indicator
    #[must_use]
    pub const fn target(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::TimeDeviation => self.deviation,
            Indicator::Reprogrammed => self.reprogrammed,
            Indicator::Rework => self.rework,
            Indicator::TestingFailure => self.testing_failure,
        }
    }
}

/// One indicator compared against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorResult {
    /// Which indicator
    pub indicator: Indicator,
    /// Measured value, in percent
    pub percent: f64,
    /// Upper bound, in percent
    pub target: f64,
    /// Whether the value is at or below the target
    pub met: bool,
}

impl SprintMetrics {
    /// Measured value of one indicator, in percent
    #[must_use]
    pub const fn percent(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::TimeDeviation => self.exceeding_percent,
            Indicator::Reprogrammed => self.reprogrammed_percent,
            Indicator::Rework => self.rework_percent,
            Indicator::TestingFailure => self.testing_failed_percent,
        }
    }

    /// Compare every indicator against its target
    #[must_use]
    pub fn indicators(&self, targets: &IndicatorTargets) -> Vec<IndicatorResult> {
        Indicator::ALL
            .into_iter()
            .map(|indicator| {
                let percent = self.percent(indicator);
                let target = targets.target(indicator);
                IndicatorResult {
                    indicator,
                    percent,
                    target,
                    met: percent <= target,
                }
            })
            .collect()
    }
}
