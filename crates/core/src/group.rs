//! Group selection with the "All" bypass sentinel

use rustc_hash::FxHashSet;

/// The sentinel group tag meaning "ignore grouping"
pub const ALL_GROUPS: &str = "All";

/// A set of selected group tags, or the bypass selection
///
/// Selecting `"All"` (the [`ALL_GROUPS`] sentinel) short-circuits the
/// group-filter stage to identity: every item passes regardless of its tag.
/// The sentinel is detected at construction, so membership checks on the
/// bypass selection cost nothing.
///
/// # Examples
///
/// ```
/// use funnel_core::GroupSelection;
///
/// let sel = GroupSelection::from_tags(["Fruit", "Veg"]);
/// assert!(sel.matches("Fruit"));
/// assert!(!sel.matches("Dairy"));
///
/// let all = GroupSelection::from_tags(["Fruit", "All"]);
/// assert!(all.matches("Dairy"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelection {
    all: bool,
    tags: FxHashSet<String>,
}

impl GroupSelection {
    /// The bypass selection: every item passes
    pub fn all() -> Self {
        GroupSelection {
            all: true,
            tags: FxHashSet::default(),
        }
    }

    /// Build a selection from tag strings
    ///
    /// If any tag equals [`ALL_GROUPS`] the result is the bypass selection.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = FxHashSet::default();
        for tag in tags {
            let tag = tag.into();
            if tag == ALL_GROUPS {
                return Self::all();
            }
            set.insert(tag);
        }
        GroupSelection {
            all: false,
            tags: set,
        }
    }

    /// Whether this is the bypass selection
    pub fn is_all(&self) -> bool {
        self.all
    }

    /// Whether an item with the given group tag passes this selection
    pub fn matches(&self, tag: &str) -> bool {
        self.all || self.tags.contains(tag)
    }
}

impl Default for GroupSelection {
    fn default() -> Self {
        Self::all()
    }
}
