//! Core sprint analysis logic
//!
//! This module contains pure business logic with no I/O dependencies.
//! Callers hand in CSV text and settings and get owned results back.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, ProcessedTask, ColumnMap, SprintMetrics)
//! - `services/` - The pipeline stages and their orchestration

pub mod models;
pub mod services;
