//! sprint-health - Sprint health indicators from exported Jira issue CSVs
//!
//! This library turns an issue-tracker CSV export into per-task deviation
//! verdicts and four sprint indicators: time deviation, reprogrammed tasks,
//! rework time and testing failures. The analysis itself lives in [`core`]
//! and is pure; [`source`], [`config`] and [`output`] are the edges the CLI
//! uses around it.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod source;

pub use crate::core::services::{PipelineOutput, run_pipeline};
