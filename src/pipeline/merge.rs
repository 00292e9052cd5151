//! Merge of newly discovered records into the stored sequence.
//!
//! New records go first, in the order the walk produced them. Stored records
//! follow, minus any that the walk found again. Records from one walk are not
//! deduplicated against each other.

use std::collections::HashSet;

use crate::models::DiscoveryRecord;

/// Merged sequence plus counts for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// The sequence to persist, newest first
    pub records: Vec<DiscoveryRecord>,
    /// Discovered records that were not stored before
    pub added: usize,
    /// Stored records kept after the new ones
    pub retained: usize,
}

impl MergeResult {
    /// Check if the merge introduced anything new.
    pub fn has_changes(&self) -> bool {
        self.added > 0
    }
}

/// Merge `discovered` in front of `stored`, dropping stored duplicates.
pub fn merge_records(discovered: Vec<DiscoveryRecord>, stored: Vec<DiscoveryRecord>) -> MergeResult {
    let stored_set: HashSet<&DiscoveryRecord> = stored.iter().collect();
    let added = discovered
        .iter()
        .filter(|record| !stored_set.contains(record))
        .count();

    let discovered_set: HashSet<DiscoveryRecord> = discovered.iter().cloned().collect();
    let kept: Vec<DiscoveryRecord> = stored
        .into_iter()
        .filter(|record| !discovered_set.contains(record))
        .collect();

    let retained = kept.len();
    let mut records = discovered;
    records.extend(kept);

    MergeResult {
        records,
        added,
        retained,
    }
}
