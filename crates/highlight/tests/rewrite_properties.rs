//! Rewrite invariants under arbitrary masks and queries
//!
//! The rewriter must hold three properties for any input: the container's
//! text content is invariant, a second application changes nothing, and
//! marks never nest.

use funnel_core::Query;
use funnel_highlight::{rewrite, Element, Node};
use funnel_match::{compute_mask, HighlightMask};
use proptest::prelude::*;

/// A small two-level fragment: leading text, one nested span, trailing text
fn fragment(lead: &str, inner: &str, trail: &str) -> Element {
    Element::new("li")
        .with_text(lead)
        .with_child(Element::new("span").with_text(inner))
        .with_text(trail)
}

fn no_nested_marks(el: &Element) -> bool {
    el.children().iter().all(|node| match node {
        Node::Element(inner) => no_nested_marks(inner),
        // marks hold plain strings by construction; nothing nests inside
        Node::Mark(_) | Node::Text(_) => true,
    })
}

proptest! {
    #[test]
    fn rewrite_preserves_text(
        lead in "[a-zA-Z ]{0,12}",
        inner in "[a-zA-Z ]{0,12}",
        trail in "[a-zA-Z ]{0,12}",
        bits in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut el = fragment(&lead, &inner, &trail);
        let text = el.text();
        let mask = HighlightMask::from_bits(
            (0..text.chars().count()).map(|i| bits.get(i).copied().unwrap_or(false)),
        );
        rewrite(&mut el, &mask).unwrap();
        prop_assert_eq!(el.text(), text);
        prop_assert!(no_nested_marks(&el));
    }

    #[test]
    fn rewrite_twice_equals_once(
        lead in "[a-zA-Z ]{0,12}",
        inner in "[a-zA-Z ]{0,12}",
        trail in "[a-zA-Z ]{0,12}",
        bits in proptest::collection::vec(any::<bool>(), 0..40),
    ) {
        let mut el = fragment(&lead, &inner, &trail);
        let len = el.text().chars().count();
        let mask = HighlightMask::from_bits(
            (0..len).map(|i| bits.get(i).copied().unwrap_or(false)),
        );
        rewrite(&mut el, &mask).unwrap();
        let once = el.clone();
        rewrite(&mut el, &mask).unwrap();
        prop_assert_eq!(el, once);
    }

    #[test]
    fn query_driven_rewrite_round_trips(
        lead in "[a-z]{0,10}",
        inner in "[a-z]{0,10}",
        needle in "[a-z]{1,4}",
    ) {
        let mut el = fragment(&lead, &inner, "");
        let text = el.text();
        let mask = compute_mask(&text, &Query::new(&needle));
        rewrite(&mut el, &mask).unwrap();
        prop_assert_eq!(el.text(), text);
    }
}
