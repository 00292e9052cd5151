//! Service layer for the archive link tracker.
//!
//! - Listing traversal (`ListingWalker`)

mod listing;

pub use listing::ListingWalker;
