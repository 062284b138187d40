//! Comparator families for the sort stage
//!
//! This module provides:
//! - sort_items: apply a [`SortMode`] to a borrowed item list
//! - default_sort_key: the whole-item key (trimmed text)
//! - SortKey: the caller-supplied key extractor seam (e.g. one table cell)
//!
//! Every deterministic mode sorts stably, so equal keys keep their prior
//! relative order. Shuffle is the one non-deterministic mode and carries
//! no ordering guarantee at all.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use funnel_core::{SortMode, ViewItem};
use rand::seq::SliceRandom;
use std::cmp::{Ordering, Reverse};

/// Key extractor: derives the sort key string from one item
///
/// The default extracts the item's trimmed text; tabular hosts supply a
/// per-column extractor instead.
pub type SortKey<I> = dyn Fn(&I) -> String;

/// The whole-item sort key: trimmed plain text
pub fn default_sort_key<I: ViewItem>(item: &I) -> String {
    item.text().trim().to_string()
}

/// Sort a borrowed item list in place according to `mode`
///
/// `SortMode::Default` leaves the order untouched.
pub fn sort_items<I>(items: &mut Vec<&I>, mode: SortMode, key: &SortKey<I>) {
    match mode {
        SortMode::Default => {}
        SortMode::Asc => items.sort_by_cached_key(|item| fold(&key(item))),
        SortMode::Desc => items.sort_by_cached_key(|item| Reverse(fold(&key(item)))),
        SortMode::NumAsc => sort_by_parsed(items, key, parse_num, cmp_option_asc),
        SortMode::NumDesc => sort_by_parsed(items, key, parse_num, cmp_option_desc),
        SortMode::DateAsc => sort_by_parsed(items, key, parse_date, cmp_option_asc),
        SortMode::DateDesc => sort_by_parsed(items, key, parse_date, cmp_option_desc),
        SortMode::LenAsc => items.sort_by_cached_key(|item| key(item).chars().count()),
        SortMode::LenDesc => items.sort_by_cached_key(|item| Reverse(key(item).chars().count())),
        SortMode::Shuffle => items.shuffle(&mut rand::thread_rng()),
    }
}

/// Case-folded form for lexicographic compare
///
/// Locale-aware collation is approximated by Unicode lowercasing; see the
/// design notes.
fn fold(key: &str) -> String {
    key.to_lowercase()
}

/// Stable sort over pre-parsed keys; `None` (unparsable) sorts last
fn sort_by_parsed<I, K>(
    items: &mut Vec<&I>,
    key: &SortKey<I>,
    parse: impl Fn(&str) -> Option<K>,
    cmp: impl Fn(&Option<K>, &Option<K>) -> Ordering,
) {
    let mut keyed: Vec<(Option<K>, &I)> = items
        .iter()
        .map(|item| (parse(&key(item)), *item))
        .collect();
    keyed.sort_by(|a, b| cmp(&a.0, &b.0));
    items.clear();
    items.extend(keyed.into_iter().map(|(_, item)| item));
}

fn cmp_option_asc<K: SortableKey>(a: &Option<K>, b: &Option<K>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.compare(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_option_desc<K: SortableKey>(a: &Option<K>, b: &Option<K>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.compare(x),
        // the sentinel sorts last in both directions
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Total comparison for parsed key types
trait SortableKey {
    fn compare(&self, other: &Self) -> Ordering;
}

impl SortableKey for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SortableKey for NaiveDateTime {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Numeric coercion of a key; non-numeric and NaN keys are the sentinel
fn parse_num(key: &str) -> Option<f64> {
    key.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Calendar coercion of a key
///
/// Accepts RFC 3339, then the common date and date-time spellings the
/// original data formats use. Anything else is the sentinel.
fn parse_date(key: &str) -> Option<NaiveDateTime> {
    let key = key.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(key) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(key, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(key, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
