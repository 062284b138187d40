//! Ordering pipeline and sort machinery for the funnel view engine
//!
//! This crate orchestrates the narrowing stages:
//! - Funnel: the fixed group-filter → sort → text-filter composition
//! - sort_items / SortKey: the comparator families behind each sort mode
//! - ObservationPause: scoped suspension of change observation around
//!   programmatic rewrites
//!
//! The pipeline is synchronous, non-blocking, and stateless between runs;
//! each run pulls a fresh snapshot and borrows its survivors from it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod funnel;
pub mod observer;
pub mod sorter;

pub use funnel::{Funnel, FunnelRequest, FunnelResponse, FunnelStats};
pub use observer::{with_observation_paused, ChangeObserver, ObservationPause};
pub use sorter::{default_sort_key, sort_items, SortKey};
