//! Query and match-mode types
//!
//! This module defines:
//! - MatchMode: the closed set of text-matching behaviors
//! - Query: a text pattern paired with the mode it is interpreted under
//!
//! MatchMode is a closed enum with exhaustive dispatch everywhere it is
//! consumed. A mode string that names none of the variants is a hard error
//! (`Error::UnknownMatchMode`), never a silent fallback to `Default`.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// MatchMode
// ============================================================================

/// How a query's text is matched against an item's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive literal substring containment (default)
    #[default]
    Default,
    /// Query text compiled as a case-insensitive regular expression
    ///
    /// A malformed pattern fails closed: nothing matches, nothing is
    /// highlighted, and no error is surfaced.
    Regex,
    /// Greedy leftmost subsequence: every pattern char appears in order,
    /// not necessarily contiguous
    Fuzzy,
}

impl MatchMode {
    /// The host-visible string form of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Default => "default",
            MatchMode::Regex => "regex",
            MatchMode::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(MatchMode::Default),
            "regex" => Ok(MatchMode::Regex),
            "fuzzy" => Ok(MatchMode::Fuzzy),
            other => Err(Error::UnknownMatchMode(other.to_string())),
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// A text query paired with its matching mode
///
/// Queries are ephemeral values, rebuilt on every triggering input event.
/// The empty query is the universal match: filtering never hides unqueried
/// items and never highlights anything.
///
/// # Examples
///
/// ```
/// use funnel_core::{MatchMode, Query};
///
/// let q = Query::new("needle").with_mode(MatchMode::Fuzzy);
/// assert_eq!(q.text, "needle");
/// assert!(!q.is_empty());
/// assert!(Query::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Query {
    /// The pattern text, interpreted according to `mode`
    pub text: String,
    /// The matching behavior
    #[serde(default)]
    pub mode: MatchMode,
}

impl Query {
    /// Create a query in the default (literal substring) mode
    pub fn new(text: impl Into<String>) -> Self {
        Query {
            text: text.into(),
            mode: MatchMode::Default,
        }
    }

    /// Builder: set the matching mode
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether this is the empty (universal-match) query
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
