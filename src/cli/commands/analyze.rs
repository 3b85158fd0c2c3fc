//! Analyze command - run the pipeline over a CSV export

use log::{debug, info};

use crate::cli::app::AnalyzeArgs;
use sprint_health::config::AnalysisConfig;
use sprint_health::output::{AnalysisReport, OutputMode};
use sprint_health::run_pipeline;
use sprint_health::source::CsvSource;

/// Analyze a CSV export and render the sprint indicators
pub fn analyze(args: &AnalyzeArgs, mode: OutputMode) -> anyhow::Result<()> {
    let (config, config_path) = AnalysisConfig::discover(args.config.as_deref())?;
    if let Some(path) = &config_path {
        debug!("loaded settings from {}", path.display());
    }

    let mut settings = config.settings();
    if let Some(basis) = args.rework_basis {
        settings.rework_basis = basis;
    }
    if let Some(counts) = args.manual_counts() {
        settings.manual_counts = Some(counts);
    }

    let source = CsvSource::from_arg(&args.csv);
    let text = source.read()?;

    let output = run_pipeline(&text, &settings);
    info!(
        "analyzed {} task(s) from {} ({} excluded)",
        output.metrics.total_tasks,
        source.describe(),
        output.metrics.excluded_tasks
    );

    let mut report =
        AnalysisReport::new(source.describe(), output, settings.rework_basis, &config.targets);
    report.config = config_path.map(|p| p.display().to_string());
    report.show_tasks = args.tasks;
    report.render(mode);

    Ok(())
}
