//! Per-character highlight masks
//!
//! This module provides:
//! - HighlightMask: a fixed-length bit vector, one bit per subject char
//! - compute_mask: mask derivation for all three match modes
//! - MaskCache: single-entry memoization owned per logical subject
//!
//! The mask is the contract between matching and rewriting: bit `i` set
//! means char `i` of the subject text should be visually emphasized.
//! An all-zero mask means "no highlight" and is always the result for an
//! empty query.

use crate::matcher::{build_insensitive, match_text};
use funnel_core::{MatchMode, Query};
use std::sync::Arc;

// ============================================================================
// HighlightMask
// ============================================================================

/// A fixed-length per-char bit vector over a subject text
///
/// Length always equals the subject's char count. Positions are Unicode
/// scalar indices, matching the fuzzy matcher's index space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMask {
    bits: Box<[bool]>,
}

impl HighlightMask {
    /// An all-zero mask of the given length
    pub fn zeros(len: usize) -> Self {
        HighlightMask {
            bits: vec![false; len].into_boxed_slice(),
        }
    }

    /// Build a mask from explicit bits
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        HighlightMask {
            bits: bits.into_iter().collect::<Vec<_>>().into_boxed_slice(),
        }
    }

    /// Mask length (== subject char count)
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the mask covers zero chars
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether any bit is set
    pub fn any(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Bit at char position `idx`; out-of-range reads are clear
    pub fn get(&self, idx: usize) -> bool {
        self.bits.get(idx).copied().unwrap_or(false)
    }

    /// Iterate all bits in position order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    fn set(&mut self, idx: usize) {
        if let Some(bit) = self.bits.get_mut(idx) {
            *bit = true;
        }
    }
}

// ============================================================================
// Mask computation
// ============================================================================

/// Compute the highlight mask for one subject text under a query
///
/// - Empty query: all-zero mask.
/// - Fuzzy: exactly the matcher's subsequence indices are set; fuzzy
///   highlights are individual chars, possibly non-adjacent.
/// - Default/Regex: a global case-insensitive scan of the whole text
///   (literal text is escaped under Default); every char covered by any
///   match span is set, overlapping and adjacent spans included. An
///   invalid pattern yields an all-zero mask.
///
/// # Examples
///
/// ```
/// use funnel_core::Query;
/// use funnel_match::compute_mask;
///
/// let mask = compute_mask("foofoo", &Query::new("foo"));
/// assert_eq!(mask.len(), 6);
/// assert!(mask.iter().all(|b| b));
/// ```
pub fn compute_mask(text: &str, query: &Query) -> HighlightMask {
    let len = text.chars().count();
    if query.is_empty() {
        return HighlightMask::zeros(len);
    }

    match query.mode {
        MatchMode::Fuzzy => fuzzy_mask(text, len, query),
        MatchMode::Default | MatchMode::Regex => scan_mask(text, len, query),
    }
}

/// Fuzzy mode: set exactly the matched subsequence positions
fn fuzzy_mask(text: &str, len: usize, query: &Query) -> HighlightMask {
    let mut mask = HighlightMask::zeros(len);
    let result = match_text(text, query);
    if !result.matched {
        return mask;
    }
    for idx in result.indices {
        mask.set(idx);
    }
    mask
}

/// Default/regex mode: mark every char covered by any match span
fn scan_mask(text: &str, len: usize, query: &Query) -> HighlightMask {
    let pattern = match query.mode {
        MatchMode::Regex => query.text.clone(),
        _ => regex::escape(&query.text),
    };

    let re = match build_insensitive(&pattern) {
        Ok(re) => re,
        Err(err) => {
            tracing::warn!(pattern = %query.text, %err, "invalid regex pattern, mask is empty");
            return HighlightMask::zeros(len);
        }
    };

    // byte offset of each char, for span-to-position translation
    let char_starts: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
    let mut mask = HighlightMask::zeros(len);

    // find_iter advances past zero-length matches on its own, so a pattern
    // matching the empty string terminates; such spans cover no chars.
    for m in re.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        let mut idx = char_starts.partition_point(|&byte| byte < m.start());
        while idx < len && char_starts[idx] < m.end() {
            mask.set(idx);
            idx += 1;
        }
    }

    mask
}

// ============================================================================
// MaskCache
// ============================================================================

struct CacheEntry {
    text: String,
    query: Query,
    mask: Arc<HighlightMask>,
}

/// Single-entry mask memoization, owned per logical subject
///
/// Holds at most one `(text, query, mode)` triple; any field change
/// invalidates it. The cache is an owned object, deliberately not a shared
/// global: a host with several live containers owns one cache per subject,
/// so repeated requests for one container never collide with another's.
///
/// Not internally synchronized. A multi-threaded host synchronizes
/// externally or keeps one cache per thread of control.
#[derive(Default)]
pub struct MaskCache {
    entry: Option<CacheEntry>,
}

impl MaskCache {
    /// Create an empty cache
    pub fn new() -> Self {
        MaskCache { entry: None }
    }

    /// Mask for `text` under `query`, reusing the cached entry when the
    /// exact triple repeats
    pub fn mask(&mut self, text: &str, query: &Query) -> Arc<HighlightMask> {
        if let Some(entry) = &self.entry {
            if entry.text == text && entry.query == *query {
                return Arc::clone(&entry.mask);
            }
        }

        let mask = Arc::new(compute_mask(text, query));
        self.entry = Some(CacheEntry {
            text: text.to_string(),
            query: query.clone(),
            mask: Arc::clone(&mask),
        });
        mask
    }
}

// ============================================================================
// Tests
// ============================================================================
