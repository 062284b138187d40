//! Error types for the funnel view engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Note the deliberate asymmetry with matching failures: a malformed regex
//! pattern is NOT represented here. Pattern errors are absorbed at the
//! matching layer and degrade to "no match" / all-zero mask, so they never
//! reach a caller as an error value.

use thiserror::Error;

/// Result type alias for funnel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the funnel view engine
#[derive(Debug, Error)]
pub enum Error {
    /// A match-mode string did not name a known mode
    #[error("unknown match mode: {0:?} (expected \"default\", \"regex\" or \"fuzzy\")")]
    UnknownMatchMode(String),

    /// A sort-mode string did not name a known mode
    #[error("unknown sort mode: {0:?}")]
    UnknownSortMode(String),

    /// A highlight mask did not cover the subject text exactly
    ///
    /// This is a contract violation, not a recoverable condition: it means
    /// offset tracking between the measure and apply phases has diverged,
    /// and the rewrite must abort before touching the fragment.
    #[error("highlight mask length mismatch: expected {expected} chars, got {actual}")]
    MaskLength {
        /// Char count of the subject text
        expected: usize,
        /// Length of the supplied mask
        actual: usize,
    },
}
