//! Fragment model and highlight rewriting for the funnel view engine
//!
//! This crate provides:
//! - Element / Node: the owned fragment tree standing in for a rendered
//!   item's content container
//! - rewrite / unwrap_marks: the minimal-diff highlight rewriter
//! - Highlighter: per-subject highlight application with mask caching
//! - escape_html: text escaping at the serialization boundary
//!
//! The rewriter's structural guarantee: only leaf text segments that
//! contain a highlighted char are replaced; every `Element` node keeps its
//! identity, attributes, and position across any number of rewrites.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fragment;
pub mod highlighter;
pub mod rewrite;

pub use fragment::{escape_html, Element, Node};
pub use highlighter::Highlighter;
pub use rewrite::{rewrite, unwrap_marks};
