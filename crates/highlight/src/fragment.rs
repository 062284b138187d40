//! Owned fragment tree for rendered item content
//!
//! This module defines the host-agnostic stand-in for a rendered item's
//! content container:
//! - Node: leaf text, a highlight mark, or a nested element
//! - Element: a tagged container with attributes and ordered children
//!
//! The tree is what the rewriter mutates and what the pipeline reads
//! through [`ViewItem`]. Text is stored raw; HTML escaping happens only at
//! the serialization boundary (`to_html`).

use funnel_core::ViewItem;
use std::borrow::Cow;

// ============================================================================
// Node
// ============================================================================

/// One node of a fragment tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf text segment
    Text(String),
    /// A highlight annotation around plain text (renders as `<mark>`)
    Mark(String),
    /// A nested structural element
    Element(Element),
}

// ============================================================================
// Element
// ============================================================================

/// A structural container: tag, attributes, ordered children
///
/// Elements are the nodes that carry host-attached state (attributes,
/// behaviors keyed on identity). The rewriter never replaces or rebuilds
/// an `Element`; it only splices replacement nodes where leaf text
/// segments used to be.
///
/// # Examples
///
/// ```
/// use funnel_highlight::Element;
///
/// let item = Element::new("li")
///     .with_attr("group", "Fruit")
///     .with_text("Apple ")
///     .with_child(Element::new("em").with_text("pie"));
///
/// assert_eq!(item.text(), "Apple pie");
/// assert_eq!(item.attr("group"), Some("Fruit"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builder: append a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Builder: append an element child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append any node
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// The element's tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The ordered children
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated plain text of the whole subtree, in document order
    ///
    /// Mark contents count as text, so the value is invariant under
    /// highlight rewriting.
    pub fn text(&self) -> String {
        let mut buf = String::new();
        collect_text(self, &mut buf);
        buf
    }

    /// Plain text of the n-th child element
    ///
    /// The cell accessor for tabular rows: `child_text(2)` is the text of
    /// the third column cell. Text and mark children do not count.
    pub fn child_text(&self, n: usize) -> Option<String> {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Element(el) => Some(el),
                _ => None,
            })
            .nth(n)
            .map(Element::text)
    }

    /// Serialize the subtree to HTML
    ///
    /// All text, mark, and attribute content is escaped here; the tree
    /// itself stores raw text.
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        write_element(self, &mut buf);
        buf
    }
}

impl ViewItem for Element {
    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.text())
    }

    fn group(&self) -> &str {
        self.attr("group").unwrap_or("")
    }
}

fn collect_text(el: &Element, buf: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(t) | Node::Mark(t) => buf.push_str(t),
            Node::Element(e) => collect_text(e, buf),
        }
    }
}

// ============================================================================
// HTML serialization
// ============================================================================

/// Escape text for safe literal display in HTML
pub fn escape_html(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    escape_into(text, &mut buf);
    buf
}

fn escape_into(text: &str, buf: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            other => buf.push(other),
        }
    }
}

fn write_element(el: &Element, buf: &mut String) {
    buf.push('<');
    buf.push_str(&el.tag);
    for (name, value) in &el.attrs {
        buf.push(' ');
        buf.push_str(name);
        buf.push_str("=\"");
        escape_into(value, buf);
        buf.push('"');
    }
    buf.push('>');
    for child in &el.children {
        write_node(child, buf);
    }
    buf.push_str("</");
    buf.push_str(&el.tag);
    buf.push('>');
}

fn write_node(node: &Node, buf: &mut String) {
    match node {
        Node::Text(t) => escape_into(t, buf),
        Node::Mark(t) => {
            buf.push_str("<mark>");
            escape_into(t, buf);
            buf.push_str("</mark>");
        }
        Node::Element(el) => write_element(el, buf),
    }
}

// ============================================================================
// Tests
// ============================================================================
