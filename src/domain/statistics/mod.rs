//! Library statistics invariants:
//!
//! 1. Statistics are ALWAYS derived from the current collection, never stored
//! 2. Every status appears in the breakdown, zero-filled
//! 3. Count lists are ordered by count descending, then name ascending

pub mod entity;
pub use entity::{CountEntry, LibraryStatistics, StatusBreakdown, RECENT_COMPLETIONS_LIMIT};
