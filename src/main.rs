//! sprint-health - Sprint health indicators from exported Jira issue CSVs
//!
//! Reads a sprint's issue export from a file or stdin, runs the analysis
//! pipeline and prints the indicators as text or JSON.

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

mod cli;

/// Main entry point for the sprint-health CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
