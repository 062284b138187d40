//! Text-matching predicate
//!
//! This module provides:
//! - Matcher: a query compiled once, applied to many item texts
//! - MatchResult: match flag plus the fuzzy index list
//! - match_text: one-shot convenience for single subjects
//!
//! All three modes are case-insensitive. A malformed regex pattern is
//! absorbed at construction and the matcher fails closed: every subject
//! reports "no match", and no error reaches the caller.

use funnel_core::{MatchMode, Query};
use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

/// Char positions matched by a fuzzy pattern, one per pattern char
pub type MatchIndices = SmallVec<[usize; 8]>;

// ============================================================================
// MatchResult
// ============================================================================

/// Outcome of matching one subject text against a query
///
/// `indices` is populated only in fuzzy mode: the char position of each
/// pattern char, strictly increasing, in pattern order. Default and regex
/// highlighting is derived separately via the mask computer, never from
/// this list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the subject matched
    pub matched: bool,
    /// Fuzzy char positions; empty in default/regex mode
    pub indices: MatchIndices,
}

impl MatchResult {
    fn hit() -> Self {
        MatchResult {
            matched: true,
            indices: MatchIndices::new(),
        }
    }

    fn miss() -> Self {
        MatchResult {
            matched: false,
            indices: MatchIndices::new(),
        }
    }
}

// ============================================================================
// Matcher
// ============================================================================

/// The compiled form of a query
enum Pattern {
    /// Empty query: universal match
    Universal,
    /// Case-folded literal substring
    Literal(String),
    /// Compiled case-insensitive regex
    Compiled(Regex),
    /// Pattern failed to compile; fails closed
    Rejected,
    /// Fuzzy pattern chars in order
    Fuzzy(Vec<char>),
}

/// A query compiled for repeated application
///
/// Construction does all per-query work (case folding, regex compilation)
/// so the per-item cost of a filter pass stays flat. The empty query
/// matches universally: filtering never hides unqueried items.
///
/// # Examples
///
/// ```
/// use funnel_core::{MatchMode, Query};
/// use funnel_match::Matcher;
///
/// let matcher = Matcher::new(&Query::new("world"));
/// assert!(matcher.matches("Hello World").matched);
/// assert!(!matcher.matches("nope").matched);
///
/// let fuzzy = Matcher::new(&Query::new("hlo").with_mode(MatchMode::Fuzzy));
/// let result = fuzzy.matches("Hello World");
/// assert!(result.matched);
/// assert_eq!(result.indices.as_slice(), &[0, 2, 4]);
/// ```
pub struct Matcher {
    pattern: Pattern,
}

impl Matcher {
    /// Compile a query into a matcher
    pub fn new(query: &Query) -> Self {
        let pattern = if query.is_empty() {
            Pattern::Universal
        } else {
            match query.mode {
                MatchMode::Default => Pattern::Literal(query.text.to_lowercase()),
                MatchMode::Regex => match build_insensitive(&query.text) {
                    Ok(re) => Pattern::Compiled(re),
                    Err(err) => {
                        tracing::warn!(
                            pattern = %query.text,
                            %err,
                            "invalid regex pattern, matcher fails closed"
                        );
                        Pattern::Rejected
                    }
                },
                MatchMode::Fuzzy => Pattern::Fuzzy(query.text.chars().collect()),
            }
        };
        Matcher { pattern }
    }

    /// Match one subject text
    pub fn matches(&self, text: &str) -> MatchResult {
        match &self.pattern {
            Pattern::Universal => MatchResult::hit(),
            Pattern::Literal(needle) => {
                if text.to_lowercase().contains(needle.as_str()) {
                    MatchResult::hit()
                } else {
                    MatchResult::miss()
                }
            }
            Pattern::Compiled(re) => {
                if re.is_match(text) {
                    MatchResult::hit()
                } else {
                    MatchResult::miss()
                }
            }
            Pattern::Rejected => MatchResult::miss(),
            Pattern::Fuzzy(pattern) => {
                let indices = fuzzy_indices(text, pattern);
                MatchResult {
                    matched: !indices.is_empty(),
                    indices,
                }
            }
        }
    }
}

/// Match a single subject against a query
///
/// Compiles the query each call; prefer [`Matcher`] when testing many
/// subjects against one query.
pub fn match_text(text: &str, query: &Query) -> MatchResult {
    Matcher::new(query).matches(text)
}

/// Compile a pattern with case-insensitivity
pub(crate) fn build_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Greedy leftmost subsequence walk
///
/// For each pattern char in order, find the first case-folded occurrence in
/// the subject at or after the position past the previous hit. Any miss
/// discards the whole index list.
fn fuzzy_indices(text: &str, pattern: &[char]) -> MatchIndices {
    let chars: Vec<char> = text.chars().collect();
    let mut indices = MatchIndices::new();
    let mut from = 0usize;

    for &pc in pattern {
        match chars[from..].iter().position(|&tc| chars_eq_fold(tc, pc)) {
            Some(offset) => {
                let idx = from + offset;
                indices.push(idx);
                from = idx + 1;
            }
            None => return MatchIndices::new(),
        }
    }

    indices
}

fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

// ============================================================================
// Tests
// ============================================================================
