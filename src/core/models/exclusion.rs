//! Reasons a task is left out of the deviation indicator

use serde::{Serialize, Serializer};

/// Why a task was excluded
///
/// Variants are listed in the order the classifier checks them; the first
/// one that applies is the only one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    /// Resolution marks the issue as a duplicate
    Duplicate,
    /// Neither an estimate nor logged work
    NoTimeData,
    /// Bug-type issue, counted only as rework
    BugType,
}

impl ExclusionReason {
    /// Message shown to users
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Duplicate => "Marked as duplicate",
            Self::NoTimeData => "No time data available",
            Self::BugType => "Bug-type task (used only for rework calculation)",
        }
    }
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for ExclusionReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}
