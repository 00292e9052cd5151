// src/pipeline/info.rs

use crate::models::Checkpoint;
use crate::storage::RecordStorage;

/// Snapshot of the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub location: String,
    pub record_count: usize,
    pub checkpoint: Checkpoint,
}

/// Describe the current contents of the record store.
pub fn run_info(storage: &dyn RecordStorage) -> StoreInfo {
    let records = storage.load_all();

    let info = StoreInfo {
        location: storage.location(),
        record_count: records.len(),
        checkpoint: Checkpoint::from_records(&records),
    };

    log::info!("Record file: {}", info.location);
    log::info!("Records: {}", info.record_count);
    log::info!("Checkpoint: {}", info.checkpoint);
    if let Some(oldest) = records.last() {
        log::info!("Oldest record: {} {}", oldest.year, oldest.month);
    }

    info
}
