//! Storage abstractions for discovery record persistence.
//!
//! The record file is a single JSON array, newest record first:
//!
//! ```text
//! storage/
//! ├── config.toml         # Tracker configuration
//! └── files-data.json     # [{ "year", "month", "link" }, ...]
//! ```

pub mod local;

use crate::error::Result;
use crate::models::{Checkpoint, DiscoveryRecord};

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for record storage backends.
///
/// Reads never fail: a missing or unreadable store is reported as empty so
/// that a first run walks the whole listing.
pub trait RecordStorage {
    /// Load every stored record, newest first.
    fn load_all(&self) -> Vec<DiscoveryRecord>;

    /// Replace the stored records with `records`.
    fn save(&self, records: &[DiscoveryRecord]) -> Result<()>;

    /// Human-readable location of the store, for log output.
    fn location(&self) -> String;

    /// The (year, month) of the newest stored record.
    fn load_checkpoint(&self) -> Checkpoint {
        let checkpoint = Checkpoint::from_records(&self.load_all());
        if !checkpoint.is_set() {
            log::info!("No checkpoint in {}; walking the full listing", self.location());
        }
        checkpoint
    }
}
