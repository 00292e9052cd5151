//! Pipeline entry points for tracker operations.
//!
//! - `run_update`: Walk the listing from the stored checkpoint and save new links
//! - `run_preview`: Walk the listing without saving
//! - `run_info`: Report on the record store
//! - `run_validate`: Check the configuration

pub mod info;
pub mod merge;
pub mod preview;
pub mod update;
pub mod validate;

#[cfg(test)]
mod testing;

pub use info::{StoreInfo, run_info};
pub use merge::{MergeResult, merge_records};
pub use preview::run_preview;
pub use update::{UpdateSummary, run_update};
pub use validate::run_validate;
