//! funnelview - live query-driven views over ordered item collections
//!
//! funnelview narrows, reorders, and annotates a collection of content
//! items in response to a text query, a group selection, and a sort mode,
//! then marks exactly the characters that matched.
//!
//! # Quick Start
//!
//! ```
//! use funnelview::{
//!     Element, Funnel, FunnelRequest, GroupSelection, Highlighter, Query, Snapshot, SortMode,
//! };
//!
//! // Rendered items, owned by the host
//! let mut items = vec![
//!     Element::new("li").with_attr("group", "Fruit").with_text("Apple"),
//!     Element::new("li").with_attr("group", "Veg").with_text("Carrot"),
//!     Element::new("li").with_attr("group", "Fruit").with_text("Apricot"),
//! ];
//!
//! // Narrow: fruits only, sorted, matching "ap"
//! let snapshot = Snapshot::capture(items.clone());
//! let req = FunnelRequest::new()
//!     .with_groups(GroupSelection::from_tags(["Fruit"]))
//!     .with_sort(SortMode::Asc)
//!     .with_query(Query::new("ap"));
//! let visible = Funnel::new().run(&snapshot, &req);
//! assert_eq!(visible.items.len(), 2);
//!
//! // Annotate: mark the matched characters on the visible items
//! let mut highlighter = Highlighter::new();
//! highlighter.apply(&mut items[0], &req.query).unwrap();
//! assert!(items[0].to_html().contains("<mark>"));
//! ```
//!
//! # Architecture
//!
//! The pipeline composes three narrowing stages in a fixed order (group
//! filter, then sort, then text filter) over an immutable [`Snapshot`] of
//! the host's items. Highlighting runs independently per visible item: a
//! per-character [`HighlightMask`] is computed from the query (with a
//! per-subject single-entry cache) and applied by a minimal-diff rewrite
//! that only touches text segments containing a matched character.

// Re-export the public API from the member crates
pub use funnel_core::{
    Error, GroupSelection, MatchMode, Query, Result, Snapshot, SortMode, TextItem, ViewItem,
    ALL_GROUPS,
};
pub use funnel_engine::{
    default_sort_key, sort_items, with_observation_paused, ChangeObserver, Funnel, FunnelRequest,
    FunnelResponse, FunnelStats, ObservationPause, SortKey,
};
pub use funnel_highlight::{escape_html, rewrite, unwrap_marks, Element, Highlighter, Node};
pub use funnel_match::{
    compute_mask, match_text, HighlightMask, MaskCache, MatchIndices, MatchResult, Matcher,
};
