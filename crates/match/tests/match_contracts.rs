//! Matching and masking contract tests
//!
//! Property-based validation of the invariants the rewriter and pipeline
//! rely on: mask length, fuzzy index monotonicity, and fail-closed
//! behavior for arbitrary (possibly malformed) patterns.

use funnel_core::{MatchMode, Query};
use funnel_match::{compute_mask, match_text};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = MatchMode> {
    prop_oneof![
        Just(MatchMode::Default),
        Just(MatchMode::Regex),
        Just(MatchMode::Fuzzy),
    ]
}

proptest! {
    /// length(computeMask(text, query, mode)) == length(text), always
    #[test]
    fn mask_length_invariant(
        text in ".{0,64}",
        pattern in ".{0,16}",
        mode in any_mode(),
    ) {
        let query = Query::new(pattern).with_mode(mode);
        let mask = compute_mask(&text, &query);
        prop_assert_eq!(mask.len(), text.chars().count());
    }

    /// fuzzy indices are strictly increasing, one per pattern char
    #[test]
    fn fuzzy_indices_strictly_increasing(
        text in ".{0,64}",
        pattern in "[a-z]{1,8}",
    ) {
        let query = Query::new(&pattern).with_mode(MatchMode::Fuzzy);
        let result = match_text(&text, &query);
        if result.matched {
            prop_assert_eq!(result.indices.len(), pattern.chars().count());
            for pair in result.indices.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            let char_count = text.chars().count();
            for &idx in &result.indices {
                prop_assert!(idx < char_count);
            }
        } else {
            prop_assert!(result.indices.is_empty());
        }
    }

    /// arbitrary pattern text never panics or errors in regex mode,
    /// and every set mask bit lies inside the subject
    #[test]
    fn regex_mode_absorbs_arbitrary_patterns(
        text in ".{0,64}",
        pattern in ".{0,16}",
    ) {
        let query = Query::new(pattern).with_mode(MatchMode::Regex);
        let _ = match_text(&text, &query);
        let mask = compute_mask(&text, &query);
        prop_assert_eq!(mask.len(), text.chars().count());
    }

    /// the empty query matches every subject and highlights nothing
    #[test]
    fn empty_query_is_universal(text in ".{0,64}", mode in any_mode()) {
        let query = Query::new("").with_mode(mode);
        prop_assert!(match_text(&text, &query).matched);
        prop_assert!(!compute_mask(&text, &query).any());
    }

    /// default mode: every subject containing the pattern verbatim matches
    #[test]
    fn default_mode_finds_verbatim_substring(
        prefix in "[a-z]{0,8}",
        needle in "[a-z]{1,8}",
        suffix in "[a-z]{0,8}",
    ) {
        let text = format!("{prefix}{needle}{suffix}");
        let query = Query::new(&needle);
        prop_assert!(match_text(&text, &query).matched);
        prop_assert!(compute_mask(&text, &query).any());
    }
}
