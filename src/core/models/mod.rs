//! Domain models for sprint analysis
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] / [`ProcessedTask`] - one issue before and after evaluation
//! - [`ExclusionReason`] - why a task is left out of the deviation indicator
//! - [`Field`] / [`ColumnMap`] - semantic columns and where they were found
//! - [`SprintMetrics`] - the four indicators
//! - [`AnalysisSettings`] - thresholds, rework basis and manual counts

mod column;
mod exclusion;
mod metrics;
mod settings;
mod task;

pub use column::{AliasTable, ColumnMap, Field, ResolvedColumn};
pub use exclusion::ExclusionReason;
pub use metrics::{Indicator, IndicatorResult, IndicatorTargets, SprintMetrics};
pub use settings::{AnalysisSettings, ManualCounts, ReworkBasis, VarianceThresholds};
pub use task::{ProcessedTask, StatusIcon, Task};

/// A tokenized CSV line, one string per column
pub type RawRow = Vec<String>;
