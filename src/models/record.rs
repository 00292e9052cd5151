// src/models/record.rs

//! Discovery records and the resume checkpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A ZIP download link discovered under a year/month entry of the listing.
///
/// Year and month are kept verbatim as displayed on the page; two records are
/// the same record only when all three fields match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DiscoveryRecord {
    /// Year label (e.g., "2025")
    #[serde(default)]
    pub year: String,

    /// Month label as published (e.g., "Marzo")
    #[serde(default)]
    pub month: String,

    /// Absolute URL of the ZIP archive
    #[serde(default)]
    pub link: String,
}

impl DiscoveryRecord {
    pub fn new(year: impl Into<String>, month: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            link: link.into(),
        }
    }

    /// The checkpoint a run would resume from if this were the newest record.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(&self.year, &self.month)
    }
}

impl fmt::Display for DiscoveryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.year, self.month, self.link)
    }
}

/// The newest (year, month) already recorded by a previous run.
///
/// An empty checkpoint means nothing has been recorded and the whole listing
/// is walked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checkpoint {
    pub year: String,
    pub month: String,
}

impl Checkpoint {
    pub fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
        }
    }

    /// Checkpoint that never stops a walk.
    pub fn none() -> Self {
        Self::default()
    }

    /// Checkpoint of the first (newest) record in a stored sequence.
    pub fn from_records(records: &[DiscoveryRecord]) -> Self {
        records
            .first()
            .map(DiscoveryRecord::checkpoint)
            .unwrap_or_default()
    }

    /// Both components must be present for the checkpoint to stop a walk.
    pub fn is_set(&self) -> bool {
        !self.year.is_empty() && !self.month.is_empty()
    }

    /// Whether the walk has reached this checkpoint.
    ///
    /// Plain equality on both labels; month order is never inferred.
    pub fn is_reached(&self, year: &str, month: &str) -> bool {
        self.is_set() && self.year == year && self.month == month
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{} {}", self.year, self.month)
        } else {
            write!(f, "(none)")
        }
    }
}
