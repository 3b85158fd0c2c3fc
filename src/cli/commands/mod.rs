//! Command implementations

mod analyze;
mod columns;
mod config;

pub use analyze::analyze;
pub use columns::columns;
pub use config::show_config;
