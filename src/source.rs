//! CSV input - obtains the raw export text for the pipeline
//!
//! This is the only place analysis can fail: if the text cannot be read at
//! all, the caller gets a [`SourceError`]. Invalid UTF-8 is replaced rather
//! than rejected, matching the pipeline's best-effort handling.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use thiserror::Error;

/// Errors obtaining CSV text
#[derive(Debug, Error)]
pub enum SourceError {
    /// File does not exist
    #[error("CSV file not found: {0}")]
    NotFound(PathBuf),

    /// File exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read CSV from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Where the CSV text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    /// Standard input (`-`)
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl CsvSource {
    /// Interpret a command-line argument; `-` means stdin
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Label for reports
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole CSV text
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            Self::Stdin => read_text(std::io::stdin().lock()).map_err(SourceError::Stdin),
            Self::File(path) => {
                if !path.exists() {
                    return Err(SourceError::NotFound(path.clone()));
                }
                let bytes = fs::read(path).map_err(|source| SourceError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            },
        }
    }
}

/// Read everything from a reader as text, replacing invalid UTF-8
pub fn read_text(mut reader: impl Read) -> std::io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
