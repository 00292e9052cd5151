// src/models/mod.rs

//! Domain models for the archive link tracker.

mod config;
mod record;
mod selectors;

// Re-export all public types
pub use config::{Config, HttpConfig, PathsConfig, SourceConfig};
pub use record::{Checkpoint, DiscoveryRecord};
pub use selectors::ListingSelectors;
