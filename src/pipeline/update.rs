// src/pipeline/update.rs

//! Incremental update run: checkpoint, walk, merge, save.

use crate::error::Result;
use crate::models::{Checkpoint, Config};
use crate::pipeline::merge::merge_records;
use crate::services::ListingWalker;
use crate::storage::RecordStorage;
use crate::utils::http::PageFetcher;

/// Outcome of an update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Checkpoint the walk resumed from
    pub checkpoint: Checkpoint,
    /// Records the walk produced
    pub discovered: usize,
    /// Records that were not stored before
    pub added: usize,
    /// Records in the store after saving
    pub total: usize,
}

/// Run one incremental update against `storage`.
///
/// Any walk failure returns before the store is written.
pub fn run_update(
    config: &Config,
    storage: &dyn RecordStorage,
    fetcher: &dyn PageFetcher,
) -> Result<UpdateSummary> {
    let walker = ListingWalker::from_config(config)?;

    let stored = storage.load_all();
    let checkpoint = Checkpoint::from_records(&stored);
    log::info!("Resuming from checkpoint {}", checkpoint);

    let discovered = walker.walk(fetcher, &config.source.listing_url, &checkpoint)?;
    let discovered_count = discovered.len();

    let merged = merge_records(discovered, stored);
    storage.save(&merged.records)?;

    if merged.has_changes() {
        log::info!(
            "Saved {} records to {} ({} new, {} kept)",
            merged.records.len(),
            storage.location(),
            merged.added,
            merged.retained
        );
    } else {
        log::info!("No new links; {} unchanged", storage.location());
    }

    Ok(UpdateSummary {
        checkpoint,
        discovered: discovered_count,
        added: merged.added,
        total: merged.records.len(),
    })
}
