//! The funnel: group-filter → sort → text-filter
//!
//! This module provides:
//! - Funnel: the stateless pipeline orchestrator
//! - FunnelRequest: the per-run narrowing criteria
//! - FunnelResponse / FunnelStats: the visible subset plus stage counts
//!
//! The stage order is fixed. Grouping runs first so sorting works on the
//! reduced set; sorting runs before text filtering so search always
//! operates over the group-scoped, sort-stable order; and the empty-result
//! state reflects the conjunction of all three criteria. The filter stages
//! preserve the relative order of survivors; only the sort stage reorders.

use crate::sorter::{default_sort_key, sort_items, SortKey};
use funnel_core::{GroupSelection, Query, Snapshot, SortMode, ViewItem};
use funnel_match::Matcher;
use std::sync::Arc;

// ============================================================================
// FunnelRequest
// ============================================================================

/// The narrowing criteria for one pipeline run
///
/// Requests are ephemeral: hosts rebuild one per triggering input event.
/// The default request is the identity pass (all groups, no sort, empty
/// query).
#[derive(Debug, Clone, Default)]
pub struct FunnelRequest {
    /// Which group tags stay visible
    pub groups: GroupSelection,
    /// How the surviving items are ordered
    pub sort: SortMode,
    /// The text filter
    pub query: Query,
}

impl FunnelRequest {
    /// Create the identity request
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the group selection
    pub fn with_groups(mut self, groups: GroupSelection) -> Self {
        self.groups = groups;
        self
    }

    /// Builder: set the sort mode
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Builder: set the text query
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}

// ============================================================================
// FunnelStats / FunnelResponse
// ============================================================================

/// Stage counts for one pipeline run
///
/// Counts decrease monotonically: `total >= after_groups >= visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelStats {
    /// Items in the snapshot
    pub total: usize,
    /// Items surviving the group filter
    pub after_groups: usize,
    /// Items surviving the text filter (the visible count)
    pub visible: usize,
}

/// The visible ordered subset produced by one pipeline run
#[derive(Debug)]
pub struct FunnelResponse<'a, I> {
    /// Surviving items in display order, borrowed from the snapshot
    pub items: Vec<&'a I>,
    /// Stage counts (feeds the host's empty-state toggle)
    pub stats: FunnelStats,
}

impl<I> FunnelResponse<'_, I> {
    /// Whether nothing survived the three narrowing criteria
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Funnel
// ============================================================================

/// Pipeline orchestrator
///
/// Funnel is STATELESS across runs: it holds only its configuration (the
/// optional sort-key extractor). Each run takes a fresh [`Snapshot`] and a
/// request, and borrows the surviving items from that snapshot.
///
/// # Examples
///
/// ```
/// use funnel_core::{GroupSelection, Query, Snapshot, SortMode, TextItem};
/// use funnel_engine::{Funnel, FunnelRequest};
///
/// let snapshot = Snapshot::capture(vec![
///     TextItem::new("Zebra").with_group("A"),
///     TextItem::new("Apple").with_group("B"),
/// ]);
///
/// let req = FunnelRequest::new()
///     .with_groups(GroupSelection::from_tags(["A"]))
///     .with_sort(SortMode::Asc)
///     .with_query(Query::new(""));
///
/// let response = Funnel::new().run(&snapshot, &req);
/// let visible: Vec<_> = response.items.iter().map(|i| i.text()).collect();
/// // "Apple" was removed by the group filter before sort/filter saw it
/// assert_eq!(visible, vec!["Zebra"]);
/// ```
pub struct Funnel<I> {
    sort_key: Option<Arc<dyn Fn(&I) -> String>>,
}

impl<I: ViewItem> Funnel<I> {
    /// Create a funnel sorting on whole-item text
    pub fn new() -> Self {
        Funnel { sort_key: None }
    }

    /// Builder: sort on a caller-supplied key (e.g. one table column)
    pub fn with_sort_key(mut self, key: impl Fn(&I) -> String + 'static) -> Self {
        self.sort_key = Some(Arc::new(key));
        self
    }

    /// Run the pipeline over a snapshot
    pub fn run<'a>(&self, snapshot: &'a Snapshot<I>, req: &FunnelRequest) -> FunnelResponse<'a, I> {
        let total = snapshot.len();

        // 1. group filter
        let mut items: Vec<&I> = snapshot
            .iter()
            .filter(|item| req.groups.matches(item.group()))
            .collect();
        let after_groups = items.len();

        // 2. sort
        if req.sort.is_active() {
            match &self.sort_key {
                Some(key) => sort_items(&mut items, req.sort, key.as_ref()),
                None => sort_items(&mut items, req.sort, &default_sort_key::<I>),
            }
        }

        // 3. text filter
        let matcher = Matcher::new(&req.query);
        items.retain(|item| matcher.matches(&item.text()).matched);
        let visible = items.len();

        tracing::debug!(total, after_groups, visible, "funnel pass complete");

        FunnelResponse {
            items,
            stats: FunnelStats {
                total,
                after_groups,
                visible,
            },
        }
    }
}

impl<I: ViewItem> Default for Funnel<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for Funnel<I> {
    fn clone(&self) -> Self {
        Funnel {
            sort_key: self.sort_key.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
