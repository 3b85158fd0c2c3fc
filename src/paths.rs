//! Centralized path definitions for sprint-health
//!
//! sprint-health only ever reads these files; it never writes state.
//!
//! ## Lookup Order
//!
//! ```text
//! --config <PATH>                  # explicit, must exist
//! ./.sprint-health.toml            # per-project settings
//! ~/.sprint-health/config.toml     # per-user settings
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".sprint-health.toml";

/// Global config directory name
const GLOBAL_DIR: &str = ".sprint-health";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `.sprint-health.toml` in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(".").join(PROJECT_CONFIG)
}

/// Get the global sprint-health directory.
///
/// Returns `~/.sprint-health/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.sprint-health/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Implicit config locations, most specific first
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    vec![project_config(), global_config()]
}
