//! Sort-mode selection
//!
//! `SortMode` names the comparator family applied by the sort stage. The
//! comparators themselves live in the engine crate; this type is only the
//! closed selector, shared so hosts can carry it in their configuration.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparator family for the sort stage
///
/// `Default` leaves the snapshot order untouched. All deterministic modes
/// sort stably: items with equal keys keep their prior relative order.
/// `Shuffle` is explicitly non-deterministic and excluded from any
/// idempotence guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// No sorting; snapshot order is preserved
    #[default]
    Default,
    /// Lexicographic A→Z on the case-folded key
    Asc,
    /// Lexicographic Z→A on the case-folded key
    Desc,
    /// Numeric ascending; unparsable keys sort last
    NumAsc,
    /// Numeric descending; unparsable keys sort last
    NumDesc,
    /// Calendar date, oldest first; unparsable dates sort last
    DateAsc,
    /// Calendar date, newest first; unparsable dates sort last
    DateDesc,
    /// Key char count, shortest first
    LenAsc,
    /// Key char count, longest first
    LenDesc,
    /// Random order, not reproducible
    Shuffle,
}

impl SortMode {
    /// The host-visible string form of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Asc => "asc",
            SortMode::Desc => "desc",
            SortMode::NumAsc => "num-asc",
            SortMode::NumDesc => "num-desc",
            SortMode::DateAsc => "date-asc",
            SortMode::DateDesc => "date-desc",
            SortMode::LenAsc => "len-asc",
            SortMode::LenDesc => "len-desc",
            SortMode::Shuffle => "shuffle",
        }
    }

    /// Whether this mode reorders at all
    pub fn is_active(&self) -> bool {
        !matches!(self, SortMode::Default)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortMode::Default),
            "asc" => Ok(SortMode::Asc),
            "desc" => Ok(SortMode::Desc),
            "num-asc" => Ok(SortMode::NumAsc),
            "num-desc" => Ok(SortMode::NumDesc),
            "date-asc" => Ok(SortMode::DateAsc),
            "date-desc" => Ok(SortMode::DateDesc),
            "len-asc" => Ok(SortMode::LenAsc),
            "len-desc" => Ok(SortMode::LenDesc),
            "shuffle" => Ok(SortMode::Shuffle),
            other => Err(Error::UnknownSortMode(other.to_string())),
        }
    }
}
