//! Item access and snapshots
//!
//! This module defines:
//! - ViewItem: the read-only seam between the engine and caller-owned items
//! - TextItem: a minimal owned item for simple hosts and tests
//! - Snapshot: an immutable ordered capture of items for one pipeline run
//!
//! Items are owned by the caller. The engine only reads them through
//! `ViewItem` and produces reorderings and subsets; it never mutates item
//! identity.

use std::borrow::Cow;

// ============================================================================
// ViewItem
// ============================================================================

/// Read-only view of a content item
///
/// `text` is the item's derived plain-text representation (the filter and
/// highlight subject). `group` is the item's group tag; untagged items
/// report the empty string.
pub trait ViewItem {
    /// The item's plain-text representation
    fn text(&self) -> Cow<'_, str>;

    /// The item's group tag (empty when untagged)
    fn group(&self) -> &str {
        ""
    }
}

impl ViewItem for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ViewItem for &str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

// ============================================================================
// TextItem
// ============================================================================

/// A minimal owned item: plain text plus an optional group tag
///
/// Hosts with richer item types implement [`ViewItem`] themselves; this
/// struct covers plain-list hosts and tests.
///
/// # Examples
///
/// ```
/// use funnel_core::{TextItem, ViewItem};
///
/// let item = TextItem::new("Apple").with_group("Fruit");
/// assert_eq!(item.text(), "Apple");
/// assert_eq!(item.group(), "Fruit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    text: String,
    group: String,
}

impl TextItem {
    /// Create an untagged item
    pub fn new(text: impl Into<String>) -> Self {
        TextItem {
            text: text.into(),
            group: String::new(),
        }
    }

    /// Builder: set the group tag
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }
}

impl ViewItem for TextItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn group(&self) -> &str {
        &self.group
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// An immutable ordered capture of items for one pipeline run
///
/// The funnel stages never observe mutations made after capture; re-running
/// the pipeline against changed content requires a fresh snapshot. This is
/// the stability anchor for the whole pipeline: filters preserve the
/// relative order of survivors as captured here.
#[derive(Debug, Clone, Default)]
pub struct Snapshot<I> {
    items: Vec<I>,
}

impl<I> Snapshot<I> {
    /// Capture a snapshot from any item source
    pub fn capture(items: impl IntoIterator<Item = I>) -> Self {
        Snapshot {
            items: items.into_iter().collect(),
        }
    }

    /// Number of captured items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the captured items in capture order
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    /// The captured items as a slice
    pub fn as_slice(&self) -> &[I] {
        &self.items
    }
}

impl<I: ViewItem> Snapshot<I> {
    /// Distinct group tags in first-seen order
    ///
    /// This is the list a host uses to populate its group selector.
    /// Untagged items contribute the empty tag.
    pub fn group_names(&self) -> Vec<String> {
        let mut seen = rustc_hash::FxHashSet::default();
        let mut names = Vec::new();
        for item in &self.items {
            let group = item.group();
            if seen.insert(group.to_string()) {
                names.push(group.to_string());
            }
        }
        names
    }
}

impl<'a, I> IntoIterator for &'a Snapshot<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
