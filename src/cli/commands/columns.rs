//! Columns command - show how the header row resolves

use std::path::Path;

use sprint_health::config::AnalysisConfig;
use sprint_health::core::services::inspect_columns;
use sprint_health::output::{ColumnReport, OutputMode};
use sprint_health::source::CsvSource;

/// Print the column each semantic field resolved to
pub fn columns(csv: &str, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, _) = AnalysisConfig::discover(config)?;

    let source = CsvSource::from_arg(csv);
    let text = source.read()?;

    let (header, columns) = inspect_columns(&text, &config.alias_table());
    ColumnReport::new(source.describe(), header, &columns).render(mode);

    Ok(())
}
