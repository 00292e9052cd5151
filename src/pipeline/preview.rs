// src/pipeline/preview.rs

//! Dry run: walk the listing and report without touching the store.

use crate::error::Result;
use crate::models::{Checkpoint, Config, DiscoveryRecord};
use crate::services::ListingWalker;
use crate::storage::RecordStorage;
use crate::utils::http::PageFetcher;

/// Walk the listing and return what an update would record.
///
/// With `full`, the stored checkpoint is ignored and the whole listing is
/// returned.
pub fn run_preview(
    config: &Config,
    storage: &dyn RecordStorage,
    fetcher: &dyn PageFetcher,
    full: bool,
) -> Result<Vec<DiscoveryRecord>> {
    let walker = ListingWalker::from_config(config)?;

    let checkpoint = if full {
        Checkpoint::none()
    } else {
        storage.load_checkpoint()
    };

    let records = walker.walk(fetcher, &config.source.listing_url, &checkpoint)?;
    log::info!(
        "{} record(s) newer than checkpoint {} (nothing saved)",
        records.len(),
        checkpoint
    );
    Ok(records)
}
