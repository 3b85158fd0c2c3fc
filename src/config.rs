//! Analysis configuration
//!
//! Optional TOML file tuning thresholds, indicator targets, the rework
//! basis, the manual indicator counts and extra header aliases. Every
//! section may be omitted; missing values fall back to the defaults.
//! Unknown sections and keys are rejected.
//!
//! ```toml
//! [thresholds]
//! deviation_percent = 25.0
//!
//! [rework]
//! basis = "non-bug-tasks"
//!
//! [manual_counts]
//! reprogrammed_tasks = 2
//! final_tasks = 20
//! testing_failed_tasks = 1
//! testing_total_tasks = 18
//!
//! [columns]
//! key = ["Clé du ticket"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{
    AliasTable, AnalysisSettings, Field, IndicatorTargets, ManualCounts, ReworkBasis,
    VarianceThresholds,
};
use crate::paths;

/// Errors reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A `[columns]` key names no known field
    #[error("invalid config {path}: unknown column field `{name}`")]
    UnknownField {
        /// File that failed
        path: PathBuf,
        /// The offending key
        name: String,
    },
}

/// Rework section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReworkConfig {
    /// Denominator population
    #[serde(default)]
    pub basis: ReworkBasis,
}

/// Contents of a sprint-health config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Deviation limits
    #[serde(default)]
    pub thresholds: VarianceThresholds,
    /// Indicator targets
    #[serde(default)]
    pub targets: IndicatorTargets,
    /// Rework settings
    #[serde(default)]
    pub rework: ReworkConfig,
    /// Counts for the reprogrammed and testing-failure indicators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_counts: Option<ManualCounts>,
    /// Extra header aliases, keyed by field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<String, Vec<String>>,
}

impl AnalysisConfig {
    /// Parse config from TOML text
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(name) = config.columns.keys().find(|name| name.parse::<Field>().is_err()) {
            return Err(ConfigError::UnknownField {
                path: path.to_path_buf(),
                name: name.clone(),
            });
        }
        Ok(config)
    }

    /// Load config from a file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Find and load the config to use
    ///
    /// An explicit path must exist. Otherwise the first existing file of
    /// [`paths::config_candidates`] is used, or the defaults when there is
    /// none. Returns the file that was loaded, if any.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, Some(path.to_path_buf())));
        }

        match paths::config_candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => Ok((Self::load_from(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Header aliases with this config's extras appended
    #[must_use]
    pub fn alias_table(&self) -> AliasTable {
        let mut table = AliasTable::new();
        for (name, aliases) in &self.columns {
            let Ok(field) = name.parse::<Field>() else {
                continue;
            };
            for alias in aliases {
                table.push(field, alias.as_str());
            }
        }
        table
    }

    /// Settings for a pipeline run
    #[must_use]
    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            thresholds: self.thresholds,
            rework_basis: self.rework.basis,
            manual_counts: self.manual_counts,
            aliases: self.alias_table(),
        }
    }
}
