//! Matching and masking for the funnel view engine
//!
//! This crate provides:
//! - Matcher / match_text: the pluggable text-matching predicate
//!   (literal substring, regex, fuzzy subsequence)
//! - HighlightMask / compute_mask: per-char highlight masks
//! - MaskCache: single-entry memoization scoped per logical subject
//!
//! Matching failures never propagate: a malformed regex pattern fails
//! closed to "no match" and an all-zero mask.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mask;
pub mod matcher;

pub use mask::{compute_mask, HighlightMask, MaskCache};
pub use matcher::{match_text, MatchIndices, MatchResult, Matcher};
