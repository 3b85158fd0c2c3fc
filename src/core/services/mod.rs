//! Analysis services
//!
//! Pure functions that operate on data passed in and return results. They
//! have no I/O dependencies. In pipeline order:
//!
//! - [`tokenizer`] - CSV text to rows
//! - [`columns`] - header row to column positions
//! - [`duration`] - duration fields to seconds
//! - [`builder`] - row to task
//! - [`classifier`] - exclusion rules
//! - [`variance`] - per-task deviation verdict
//! - [`metrics`] - sprint indicators
//! - [`pipeline`] - all of the above

pub mod builder;
pub mod classifier;
pub mod columns;
pub mod duration;
pub mod metrics;
pub mod pipeline;
pub mod tokenizer;
pub mod variance;

pub use builder::build_task;
pub use classifier::{classify, is_bug_type, is_duplicate, is_rework_type};
pub use columns::{header_matches, resolve_columns};
pub use duration::parse_duration;
pub use metrics::{aggregate, ratio_percent, rework_time};
pub use pipeline::{PipelineOutput, inspect_columns, run_pipeline};
pub use tokenizer::{split_line, tokenize};
pub use variance::{VarianceBand, evaluate, format_variance, variance_percent};
