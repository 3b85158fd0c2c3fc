//! Pipeline - CSV text in, processed tasks and sprint metrics out
//!
//! A single synchronous batch transform with no I/O and no shared state.

use log::{debug, trace, warn};

use crate::core::models::{
    AliasTable, AnalysisSettings, ColumnMap, ManualCounts, ProcessedTask, SprintMetrics,
};

use super::builder::build_task;
use super::classifier::classify;
use super::columns::resolve_columns;
use super::metrics::aggregate;
use super::tokenizer::tokenize;
use super::variance::evaluate;

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Every task with a key, in CSV order
    pub tasks: Vec<ProcessedTask>,
    /// The four indicators
    pub metrics: SprintMetrics,
    /// How the header row was resolved
    pub columns: ColumnMap,
    /// Whether the indicator 2 and 4 counts came from the caller
    pub manual_counts_supplied: bool,
}

/// Run the full analysis over CSV text
///
/// Never fails: empty input, unknown headers and bad values all degrade to
/// empty or zero results.
///
/// # Examples
///
/// ```
/// use sprint_health::core::models::AnalysisSettings;
/// use sprint_health::run_pipeline;
///
/// let csv = "Key,Issue Type,Original Estimate,Time Spent\n\
///            APISNG-111,Mejora,10800,12600\n";
/// let output = run_pipeline(csv, &AnalysisSettings::default());
///
/// assert_eq!(output.tasks[0].variance_percent, "+16.7%");
/// assert_eq!(output.metrics.analyzed_tasks, 1);
/// ```
#[must_use]
pub fn run_pipeline(csv: &str, settings: &AnalysisSettings) -> PipelineOutput {
    let rows = tokenize(csv);
    let Some((header, data)) = rows.split_first() else {
        debug!("empty CSV input");
        return finish(Vec::new(), ColumnMap::unresolved(), settings);
    };

    let columns = resolve_columns(header, &settings.aliases);
    let missing = columns.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
        debug!("unresolved columns: {}", names.join(", "));
    }

    let mut tasks = Vec::with_capacity(data.len());
    for (line, row) in data.iter().enumerate() {
        let Some(task) = build_task(row, &columns) else {
            trace!("skipping data row {} without a key", line + 1);
            continue;
        };
        let exclusion = classify(&task);
        tasks.push(evaluate(task, exclusion, &settings.thresholds));
    }

    debug!("built {} task(s) from {} data row(s)", tasks.len(), data.len());
    finish(tasks, columns, settings)
}

/// Resolve only the header row of CSV text
#[must_use]
pub fn inspect_columns(csv: &str, aliases: &AliasTable) -> (Vec<String>, ColumnMap) {
    let header = tokenize(csv).into_iter().next().unwrap_or_default();
    let columns = resolve_columns(&header, aliases);
    (header, columns)
}

fn finish(tasks: Vec<ProcessedTask>, columns: ColumnMap, settings: &AnalysisSettings) -> PipelineOutput {
    let counts = settings.manual_counts.unwrap_or_else(|| {
        warn!(
            "no reprogrammed/testing counts supplied; using fixed placeholder figures, \
             those two indicators are not derived from the data"
        );
        ManualCounts::observed()
    });

    let metrics = aggregate(&tasks, settings.rework_basis, counts);
    PipelineOutput {
        tasks,
        metrics,
        columns,
        manual_counts_supplied: settings.manual_counts.is_some(),
    }
}
