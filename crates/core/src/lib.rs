//! Core types for the funnel view engine
//!
//! This crate defines the foundational types shared by every layer:
//! - Query / MatchMode: what to match and how
//! - SortMode: which comparator family the sort stage applies
//! - GroupSelection: group narrowing with the "All" bypass sentinel
//! - ViewItem / TextItem: the read-only item seam
//! - Snapshot: the per-run immutable item capture
//! - Error / Result: the error hierarchy
//!
//! Character positions everywhere in this workspace are Unicode scalar
//! (`char`) indices, never byte offsets; "text length" means
//! `text.chars().count()`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod group;
pub mod item;
pub mod query;
pub mod sort;

// Re-export commonly used types
pub use error::{Error, Result};
pub use group::{GroupSelection, ALL_GROUPS};
pub use item::{Snapshot, TextItem, ViewItem};
pub use query::{MatchMode, Query};
pub use sort::SortMode;
