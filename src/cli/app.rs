//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use sprint_health::core::models::{ManualCounts, ReworkBasis};
use sprint_health::output::OutputMode;

/// sprint-health - Sprint health indicators from Jira CSV exports
#[derive(Parser, Debug)]
#[command(
    name = "sprint-health",
    version,
    about = "Sprint health indicators from Jira CSV exports",
    long_about = "Analyze a sprint's exported issue CSV.\n\n\
                  Reports how many tasks deviate more than the allowed range from their \
                  estimate, the share of time spent on rework, and the reprogrammed and \
                  testing-failure ratios."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a CSV export and report the sprint indicators
    Analyze(AnalyzeArgs),

    /// Show which header cell each field resolved to
    Columns {
        /// CSV file, or - for stdin
        csv: String,

        /// Settings file (defaults to .sprint-health.toml, then ~/.sprint-health/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the effective settings
    Config {
        /// Settings file (defaults to .sprint-health.toml, then ~/.sprint-health/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// CSV file, or - for stdin
    pub csv: String,

    /// Settings file (defaults to .sprint-health.toml, then ~/.sprint-health/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rework denominator: all-tasks, non-bug-tasks
    #[arg(long)]
    pub rework_basis: Option<ReworkBasis>,

    /// Tasks moved to a later sprint
    #[arg(
        long,
        value_name = "N",
        requires = "final_tasks",
        requires = "testing_failed",
        requires = "testing_total"
    )]
    pub reprogrammed: Option<u32>,

    /// Tasks that stayed in the sprint
    #[arg(long = "final", value_name = "N", requires = "reprogrammed")]
    pub final_tasks: Option<u32>,

    /// Tasks sent back to development after testing
    #[arg(long, value_name = "N", requires = "reprogrammed")]
    pub testing_failed: Option<u32>,

    /// Tasks that went through testing
    #[arg(long, value_name = "N", requires = "reprogrammed")]
    pub testing_total: Option<u32>,

    /// List every task, not only the ones exceeding the threshold
    #[arg(long)]
    pub tasks: bool,
}

impl AnalyzeArgs {
    /// Manual counts given on the command line, if any
    pub const fn manual_counts(&self) -> Option<ManualCounts> {
        match (self.reprogrammed, self.final_tasks, self.testing_failed, self.testing_total) {
            (Some(reprogrammed_tasks), Some(final_tasks), Some(testing_failed_tasks), Some(testing_total_tasks)) => {
                Some(ManualCounts {
                    reprogrammed_tasks,
                    final_tasks,
                    testing_failed_tasks,
                    testing_total_tasks,
                })
            },
            _ => None,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Analyze(args)) => commands::analyze(&args, output_mode),
        Some(Command::Columns { csv, config }) => {
            commands::columns(&csv, config.as_deref(), output_mode)
        },
        Some(Command::Config { config }) => commands::show_config(config.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("sprint-health v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("sprint-health v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'sprint-health --help' for usage");
                println!("Run 'sprint-health analyze <export.csv>' to analyze a sprint");
            }
            Ok(())
        },
    }
}
