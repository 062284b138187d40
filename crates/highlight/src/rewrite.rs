//! Minimal-diff highlight rewriting
//!
//! This module applies a [`HighlightMask`] to a fragment tree in four
//! phases:
//! 1. unwrap: strip every existing mark back to plain text, so repeated
//!    application is idempotent and never nests annotations
//! 2. measure: walk the leaf text segments in document order with a
//!    running global char offset, and verify the mask covers the text
//!    exactly
//! 3. build: for each segment containing a set bit, construct the
//!    replacement node list (one mark per highlighted char, one text node
//!    per clear run)
//! 4. apply: splice the replacements in after the walk completes
//!
//! Structural change is proportional to the number of segments that
//! actually contain a highlighted char: untouched segments are never
//! replaced, and `Element` nodes are never rebuilt, so attributes and
//! attached behaviors on structural nodes survive every rewrite.

use crate::fragment::{Element, Node};
use funnel_core::{Error, Result};
use funnel_match::HighlightMask;

/// Strip every mark inside the container back to a plain text node
///
/// Each mark is replaced in place by its own text content; sibling order
/// and counts are preserved, so global char offsets are unchanged.
pub fn unwrap_marks(container: &mut Element) {
    for child in &mut container.children {
        match child {
            Node::Mark(text) => *child = Node::Text(std::mem::take(text)),
            Node::Element(el) => unwrap_marks(el),
            Node::Text(_) => {}
        }
    }
}

/// Rewrite the container's text segments to carry the mask's highlights
///
/// The mask must cover the container's text exactly (one bit per char in
/// document order). A length mismatch is a contract violation: the call
/// aborts with [`Error::MaskLength`] before any mutation.
///
/// # Examples
///
/// ```
/// use funnel_core::Query;
/// use funnel_highlight::{rewrite, Element};
/// use funnel_match::compute_mask;
///
/// let mut item = Element::new("li").with_text("foofoo");
/// let mask = compute_mask(&item.text(), &Query::new("foo"));
/// rewrite(&mut item, &mask).unwrap();
/// assert_eq!(item.to_html(), "<li>\
///     <mark>f</mark><mark>o</mark><mark>o</mark>\
///     <mark>f</mark><mark>o</mark><mark>o</mark></li>");
/// ```
pub fn rewrite(container: &mut Element, mask: &HighlightMask) -> Result<()> {
    unwrap_marks(container);

    let expected = container.text().chars().count();
    if mask.len() != expected {
        return Err(Error::MaskLength {
            expected,
            actual: mask.len(),
        });
    }

    // measure + build: read-only walk collecting replacements
    let mut replacements = Vec::new();
    let mut path = Vec::new();
    let mut offset = 0usize;
    collect_replacements(container, mask, &mut path, &mut offset, &mut replacements);

    if replacements.is_empty() {
        return Ok(());
    }
    tracing::debug!(segments = replacements.len(), "rewriting highlighted text segments");

    // apply: splice in reverse document order so the sibling positions of
    // earlier replacements stay valid while later ones grow the child list
    for (leaf_path, nodes) in replacements.into_iter().rev() {
        let (parent, idx) = locate_parent(container, &leaf_path);
        parent.children.splice(idx..idx + 1, nodes);
    }

    Ok(())
}

/// One scheduled replacement: path to a leaf text node, and what replaces it
type Replacement = (Vec<usize>, Vec<Node>);

fn collect_replacements(
    el: &Element,
    mask: &HighlightMask,
    path: &mut Vec<usize>,
    offset: &mut usize,
    out: &mut Vec<Replacement>,
) {
    for (idx, child) in el.children().iter().enumerate() {
        path.push(idx);
        match child {
            Node::Text(text) => {
                if let Some(nodes) = build_segment(text, mask, *offset) {
                    out.push((path.clone(), nodes));
                }
                *offset += text.chars().count();
            }
            // marks are gone after unwrap; count defensively so offsets
            // stay aligned with Element::text()
            Node::Mark(text) => *offset += text.chars().count(),
            Node::Element(inner) => collect_replacements(inner, mask, path, offset, out),
        }
        path.pop();
    }
}

/// Build the replacement nodes for one segment, or None when no bit is set
fn build_segment(text: &str, mask: &HighlightMask, offset: usize) -> Option<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut run = String::new();
    let mut any_set = false;

    for (i, ch) in text.chars().enumerate() {
        if mask.get(offset + i) {
            any_set = true;
            if !run.is_empty() {
                nodes.push(Node::Text(std::mem::take(&mut run)));
            }
            nodes.push(Node::Mark(ch.to_string()));
        } else {
            run.push(ch);
        }
    }

    if !any_set {
        return None;
    }
    if !run.is_empty() {
        nodes.push(Node::Text(run));
    }
    Some(nodes)
}

/// Resolve the parent element and child index addressed by a leaf path
///
/// Paths come from the same walk that scheduled the replacement, so every
/// intermediate step addresses an element child.
fn locate_parent<'a>(root: &'a mut Element, path: &[usize]) -> (&'a mut Element, usize) {
    let (&leaf_idx, parents) = path.split_last().expect("leaf path is never empty");
    let mut current = root;
    for &idx in parents {
        current = match &mut current.children[idx] {
            Node::Element(el) => el,
            _ => unreachable!("replacement paths traverse elements only"),
        };
    }
    (current, leaf_idx)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use funnel_core::Query;
    use funnel_match::compute_mask;

    fn mask_for(el: &Element, query: &str) -> HighlightMask {
        compute_mask(&el.text(), &Query::new(query))
    }

    #[test]
    fn test_full_coverage_marks_every_char() {
        let mut el = Element::new("li").with_text("foo");
        let mask = mask_for(&el, "foo");
        rewrite(&mut el, &mask).unwrap();
        assert_eq!(
            el.children(),
            &[
                Node::Mark("f".into()),
                Node::Mark("o".into()),
                Node::Mark("o".into()),
            ]
        );
    }

    #[test]
    fn test_partial_coverage_keeps_clear_runs_as_text() {
        let mut el = Element::new("li").with_text("say foo now");
        let mask = mask_for(&el, "foo");
        rewrite(&mut el, &mask).unwrap();
        assert_eq!(
            el.children(),
            &[
                Node::Text("say ".into()),
                Node::Mark("f".into()),
                Node::Mark("o".into()),
                Node::Mark("o".into()),
                Node::Text(" now".into()),
            ]
        );
    }

    #[test]
    fn test_zero_bit_mask_leaves_tree_untouched() {
        let mut el = Element::new("li")
            .with_text("hello")
            .with_child(Element::new("span").with_text("world"));
        let before = el.clone();
        let mask = HighlightMask::zeros(10);
        rewrite(&mut el, &mask).unwrap();
        assert_eq!(el, before);
    }

    #[test]
    fn test_untouched_segments_are_not_replaced() {
        // mask covers only the first segment; the second must stay one
        // single text node (replacement would have split it)
        let mut el = Element::new("li")
            .with_text("foo")
            .with_child(Element::new("span").with_text("bar"));
        let mask = mask_for(&el, "foo");
        rewrite(&mut el, &mask).unwrap();

        let span = match &el.children()[3] {
            Node::Element(e) => e,
            other => panic!("expected span element, got {other:?}"),
        };
        assert_eq!(span.children(), &[Node::Text("bar".into())]);
    }

    #[test]
    fn test_highlight_spans_nested_structure() {
        // "ab" + <b>"cd"</b>: query "bc" crosses the element boundary
        let mut el = Element::new("li")
            .with_text("ab")
            .with_child(Element::new("b").with_text("cd"));
        let mask = mask_for(&el, "bc");
        rewrite(&mut el, &mask).unwrap();

        assert_eq!(el.children()[0], Node::Text("a".into()));
        assert_eq!(el.children()[1], Node::Mark("b".into()));
        let inner = match &el.children()[2] {
            Node::Element(e) => e,
            other => panic!("expected element, got {other:?}"),
        };
        assert_eq!(inner.tag(), "b");
        assert_eq!(
            inner.children(),
            &[Node::Mark("c".into()), Node::Text("d".into())]
        );
    }

    #[test]
    fn test_structural_nodes_keep_attributes() {
        let mut el = Element::new("li")
            .with_child(Element::new("a").with_attr("href", "/x").with_text("link"));
        let mask = mask_for(&el, "link");
        rewrite(&mut el, &mask).unwrap();

        let anchor = match &el.children()[0] {
            Node::Element(e) => e,
            other => panic!("expected element, got {other:?}"),
        };
        assert_eq!(anchor.attr("href"), Some("/x"));
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let mut once = Element::new("li")
            .with_text("say foo ")
            .with_child(Element::new("b").with_text("foo"));
        let mask = mask_for(&once, "foo");
        rewrite(&mut once, &mask).unwrap();

        let mut twice = once.clone();
        rewrite(&mut twice, &mask).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_rewrite_preserves_text_content() {
        let mut el = Element::new("li").with_text("The quick brown fox");
        let mask = mask_for(&el, "quick");
        rewrite(&mut el, &mask).unwrap();
        assert_eq!(el.text(), "The quick brown fox");
    }

    #[test]
    fn test_unwrap_marks_restores_plain_text_nodes() {
        let mut el = Element::new("li").with_text("foo");
        let mask = mask_for(&el, "fo");
        rewrite(&mut el, &mask).unwrap();

        unwrap_marks(&mut el);
        assert!(el
            .children()
            .iter()
            .all(|n| matches!(n, Node::Text(_))));
        assert_eq!(el.text(), "foo");
    }

    #[test]
    fn test_mask_length_mismatch_aborts_loudly() {
        let mut el = Element::new("li").with_text("hello");
        let before = el.clone();
        let err = rewrite(&mut el, &HighlightMask::zeros(3)).unwrap_err();
        assert!(matches!(
            err,
            Error::MaskLength {
                expected: 5,
                actual: 3
            }
        ));
        // aborted before mutation
        assert_eq!(el, before);
    }

    #[test]
    fn test_multibyte_chars_highlight_cleanly() {
        let mut el = Element::new("li").with_text("héllo");
        let mask = mask_for(&el, "é");
        rewrite(&mut el, &mask).unwrap();
        assert_eq!(
            el.children(),
            &[
                Node::Text("h".into()),
                Node::Mark("é".into()),
                Node::Text("llo".into()),
            ]
        );
    }

    #[test]
    fn test_empty_container_is_a_no_op() {
        let mut el = Element::new("li");
        rewrite(&mut el, &HighlightMask::zeros(0)).unwrap();
        assert_eq!(el.children().len(), 0);
    }
}
