//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::models::{
    ColumnMap, Field, Indicator, IndicatorResult, IndicatorTargets, ProcessedTask, ReworkBasis,
    SprintMetrics,
};
use crate::core::services::PipelineOutput;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an analyze operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Where the CSV came from
    pub source: String,
    /// Config file used, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Rework denominator used
    pub rework_basis: ReworkBasis,
    /// Whether indicator 2 and 4 counts were supplied rather than placeholders
    pub manual_counts_supplied: bool,
    /// Sprint metrics
    pub metrics: SprintMetrics,
    /// Indicators compared against their targets
    pub indicators: Vec<IndicatorResult>,
    /// Fields that matched no header cell
    pub missing_columns: Vec<&'static str>,
    /// Every processed task
    pub tasks: Vec<ProcessedTask>,
    /// List every task in human mode, not only the exceeding ones
    #[serde(skip)]
    pub show_tasks: bool,
}

impl AnalysisReport {
    /// Build a report from a pipeline run
    #[must_use]
    pub fn new(
        source: String,
        output: PipelineOutput,
        rework_basis: ReworkBasis,
        targets: &IndicatorTargets,
    ) -> Self {
        Self {
            source,
            config: None,
            rework_basis,
            manual_counts_supplied: output.manual_counts_supplied,
            indicators: output.metrics.indicators(targets),
            metrics: output.metrics,
            missing_columns: output.columns.missing().into_iter().map(Field::name).collect(),
            tasks: output.tasks,
            show_tasks: false,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human_text()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable report text
    #[must_use]
    pub fn human_text(&self) -> String {
        let m = &self.metrics;
        let mut out = String::new();

        let _ = writeln!(out, "Sprint analysis: {}", self.source.bold());
        if let Some(config) = &self.config {
            let _ = writeln!(out, "Settings: {config}");
        }
        let _ = writeln!(
            out,
            "  {} task(s): {} analyzed, {} excluded, {} exceeding\n",
            m.total_tasks, m.analyzed_tasks, m.excluded_tasks, m.exceeding_tasks
        );

        let _ = writeln!(out, "Indicators:");
        for result in &self.indicators {
            let badge = if result.met {
                format!("{:<6}", "[OK]").green()
            } else {
                format!("{:<6}", "[FAIL]").red()
            };
            let _ = writeln!(
                out,
                "  {badge} {:<20} {:>7.2}%  target <= {}%  {}",
                result.indicator.title(),
                result.percent,
                result.target,
                indicator_detail(m, result.indicator, self.rework_basis)
            );
        }
        if !self.manual_counts_supplied {
            let _ = writeln!(
                out,
                "  {}",
                "Reprogrammed and testing counts are placeholders, not derived from the CSV."
                    .yellow()
            );
        }

        let exceeding: Vec<&ProcessedTask> = self.tasks.iter().filter(|t| t.is_exceeding()).collect();
        if exceeding.is_empty() {
            if m.analyzed_tasks > 0 {
                let _ = writeln!(out, "\nAll analyzed tasks are within the threshold.");
            }
        } else {
            let _ = writeln!(out, "\nTasks exceeding the threshold:");
            for task in exceeding {
                let _ = writeln!(out, "{}", task_line(task));
            }
        }

        if self.show_tasks && !self.tasks.is_empty() {
            let _ = writeln!(out, "\nAll tasks:");
            for task in &self.tasks {
                let _ = writeln!(out, "{}", task_line(task));
            }
        }

        if !self.missing_columns.is_empty() {
            let _ = writeln!(out, "\nUnresolved columns: {}", self.missing_columns.join(", "));
        }

        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Value column of the indicator table
#[must_use]
pub fn indicator_detail(metrics: &SprintMetrics, indicator: Indicator, basis: ReworkBasis) -> String {
    match indicator {
        Indicator::TimeDeviation => {
            format!("{} of {} tasks", metrics.exceeding_tasks, metrics.analyzed_tasks)
        },
        Indicator::Reprogrammed => format!(
            "{} reprogrammed / {} total",
            metrics.reprogrammed_tasks,
            u64::from(metrics.reprogrammed_tasks) + u64::from(metrics.final_tasks)
        ),
        Indicator::Rework => format!(
            "{:.0} min of {:.0} min ({basis})",
            metrics.rework_minutes, metrics.total_minutes
        ),
        Indicator::TestingFailure => {
            format!("{} of {} tasks", metrics.testing_failed_tasks, metrics.testing_total_tasks)
        },
    }
}

fn task_line(task: &ProcessedTask) -> String {
    format!(
        "  {} {:<12} {:<12} {:>5.1}h est {:>5.1}h worked {:>8}  {}",
        task.status_icon.symbol(),
        task.task.key,
        task.task.issue_type,
        task.estimate_hours,
        task.worked_hours,
        task.variance_percent,
        task.note
    )
}

/// One field of a column report
#[derive(Debug, Serialize)]
pub struct ColumnEntry {
    /// Field name
    pub field: &'static str,
    /// Zero-based column index, if resolved
    pub index: Option<usize>,
    /// Matched header text, if resolved
    pub header: Option<String>,
}

/// Result of a columns operation
#[derive(Debug, Serialize)]
pub struct ColumnReport {
    /// Where the CSV came from
    pub source: String,
    /// Header cells as tokenized
    pub header: Vec<String>,
    /// Resolution of every field
    pub fields: Vec<ColumnEntry>,
}

impl ColumnReport {
    /// Build a report from a resolved header
    #[must_use]
    pub fn new(source: String, header: Vec<String>, columns: &ColumnMap) -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| ColumnEntry {
                field: field.name(),
                index: columns.index(field),
                header: columns.column(field).map(|c| c.header.clone()),
            })
            .collect();
        Self {
            source,
            header,
            fields,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human_text()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable report text
    #[must_use]
    pub fn human_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Columns in {} ({} header cell(s)):\n", self.source, self.header.len());
        for entry in &self.fields {
            match (entry.index, &entry.header) {
                (Some(index), Some(header)) => {
                    let _ = writeln!(out, "  {:<16} #{index:<3} {header}", entry.field);
                },
                _ => {
                    let _ = writeln!(out, "  {:<16} {}", entry.field, "not found".red());
                },
            }
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a config operation
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// File the settings were loaded from; `None` means built-in defaults
    pub path: Option<String>,
    /// Effective settings
    pub config: AnalysisConfig,
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.human_text()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable report text
    #[must_use]
    pub fn human_text(&self) -> String {
        let origin = self.path.as_deref().unwrap_or("built-in defaults");
        let body = toml::to_string_pretty(&self.config).unwrap_or_default();
        format!("# Settings from {origin}\n{body}")
    }
}
