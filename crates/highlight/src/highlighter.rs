//! Query-driven highlight application
//!
//! [`Highlighter`] is the component that turns a query into visible marks
//! on the currently-visible containers. It owns its own [`MaskCache`], so
//! repeated passes over one subject reuse the computed mask while two
//! highlighters for two lists never collide.

use crate::fragment::Element;
use crate::rewrite::{rewrite, unwrap_marks};
use funnel_core::{Query, Result};
use funnel_match::MaskCache;

/// Applies query highlights to item containers
///
/// Per container: stale marks are stripped first, then the mask for the
/// container's full text is computed (or reused from the owned cache) and
/// rewritten in. An empty query or an all-zero mask leaves the container
/// mark-free with its structure intact.
///
/// # Examples
///
/// ```
/// use funnel_core::Query;
/// use funnel_highlight::{Element, Highlighter};
///
/// let mut item = Element::new("li").with_text("Apple");
/// let mut highlighter = Highlighter::new();
///
/// highlighter.apply(&mut item, &Query::new("app")).unwrap();
/// assert!(item.to_html().contains("<mark>"));
///
/// // a cleared query removes the marks again
/// highlighter.apply(&mut item, &Query::new("")).unwrap();
/// assert_eq!(item.to_html(), "<li>Apple</li>");
/// ```
#[derive(Default)]
pub struct Highlighter {
    cache: MaskCache,
}

impl Highlighter {
    /// Create a highlighter with an empty cache
    pub fn new() -> Self {
        Highlighter {
            cache: MaskCache::new(),
        }
    }

    /// Highlight one container for the query
    pub fn apply(&mut self, container: &mut Element, query: &Query) -> Result<()> {
        unwrap_marks(container);
        if query.is_empty() {
            return Ok(());
        }

        let text = container.text();
        let mask = self.cache.mask(&text, query);
        if !mask.any() {
            return Ok(());
        }

        rewrite(container, &mask)
    }

    /// Highlight every container in a visible set
    pub fn apply_all<'a>(
        &mut self,
        containers: impl IntoIterator<Item = &'a mut Element>,
        query: &Query,
    ) -> Result<()> {
        for container in containers {
            self.apply(container, query)?;
        }
        Ok(())
    }
}
