//! Config command - show the effective settings

use std::path::Path;

use sprint_health::config::AnalysisConfig;
use sprint_health::output::{ConfigReport, OutputMode};

/// Print the settings an analysis would use
pub fn show_config(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, path) = AnalysisConfig::discover(config)?;

    ConfigReport {
        path: path.map(|p| p.display().to_string()),
        config,
    }
    .render(mode);

    Ok(())
}
