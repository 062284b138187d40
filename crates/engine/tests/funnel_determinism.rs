//! Funnel determinism and ordering contracts
//!
//! Every deterministic request must produce identical results on repeated
//! runs, filter stages must preserve snapshot order, and stage counts must
//! narrow monotonically.

use funnel_core::{GroupSelection, MatchMode, Query, Snapshot, SortMode, TextItem};
use funnel_engine::{Funnel, FunnelRequest};
use proptest::prelude::*;

fn item_strategy() -> impl Strategy<Value = TextItem> {
    ("[a-d ]{0,8}", "[A-B]{0,1}")
        .prop_map(|(text, group)| TextItem::new(text).with_group(group))
}

fn deterministic_sort() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::Default),
        Just(SortMode::Asc),
        Just(SortMode::Desc),
        Just(SortMode::NumAsc),
        Just(SortMode::LenAsc),
        Just(SortMode::LenDesc),
    ]
}

fn texts(items: &[&TextItem]) -> Vec<String> {
    items.iter().map(|i| i.text().to_string()).collect()
}

#[test]
fn same_request_produces_identical_results() {
    let snapshot = Snapshot::capture(vec![
        TextItem::new("delta").with_group("A"),
        TextItem::new("alpha").with_group("B"),
        TextItem::new("gamma").with_group("A"),
        TextItem::new("beta").with_group("B"),
    ]);
    let funnel = Funnel::new();
    let req = FunnelRequest::new()
        .with_groups(GroupSelection::from_tags(["A", "B"]))
        .with_sort(SortMode::Asc)
        .with_query(Query::new("a"));

    let first = funnel.run(&snapshot, &req);
    let second = funnel.run(&snapshot, &req);
    assert_eq!(texts(&first.items), texts(&second.items));
    assert_eq!(first.stats, second.stats);
}

proptest! {
    /// with no sort, the visible set is a subsequence of the snapshot
    #[test]
    fn filters_preserve_snapshot_order(
        items in proptest::collection::vec(item_strategy(), 0..12),
        needle in "[a-d]{0,2}",
        group in prop_oneof![Just(None), Just(Some("A")), Just(Some("B"))],
    ) {
        let snapshot = Snapshot::capture(items);
        let groups = match group {
            None => GroupSelection::all(),
            Some(tag) => GroupSelection::from_tags([tag]),
        };
        let req = FunnelRequest::new()
            .with_groups(groups)
            .with_query(Query::new(needle));
        let response = Funnel::new().run(&snapshot, &req);

        // each survivor appears in the snapshot after the previous one
        let mut cursor = 0usize;
        for item in &response.items {
            let pos = snapshot.as_slice()[cursor..]
                .iter()
                .position(|s| std::ptr::eq(s, *item));
            prop_assert!(pos.is_some());
            cursor += pos.unwrap() + 1;
        }
    }

    /// stage counts narrow monotonically for any request
    #[test]
    fn stats_narrow_monotonically(
        items in proptest::collection::vec(item_strategy(), 0..12),
        needle in ".{0,4}",
        sort in deterministic_sort(),
    ) {
        let snapshot = Snapshot::capture(items);
        let req = FunnelRequest::new()
            .with_sort(sort)
            .with_query(Query::new(needle).with_mode(MatchMode::Default));
        let stats = Funnel::new().run(&snapshot, &req).stats;
        prop_assert!(stats.total >= stats.after_groups);
        prop_assert!(stats.after_groups >= stats.visible);
        prop_assert_eq!(stats.total, snapshot.len());
    }

    /// deterministic runs are idempotent end to end
    #[test]
    fn deterministic_requests_repeat_exactly(
        items in proptest::collection::vec(item_strategy(), 0..12),
        sort in deterministic_sort(),
        needle in "[a-d]{0,2}",
    ) {
        let snapshot = Snapshot::capture(items);
        let funnel = Funnel::new();
        let req = FunnelRequest::new()
            .with_sort(sort)
            .with_query(Query::new(needle));
        let first = funnel.run(&snapshot, &req);
        let second = funnel.run(&snapshot, &req);
        prop_assert_eq!(texts(&first.items), texts(&second.items));
    }
}
