//! postdoc - static renderer for a restricted blog markup dialect
//!
//! The dialect has three constructs: `#` headings, `##` headings, and
//! blank-line-separated paragraphs. Two rendering front-ends share one
//! segmenter:
//!
//! - [`render_to_nodes`] produces typed [`ContentNode`]s for callers that
//!   build interactive views (anchored headings, a clickable table of
//!   contents via [`build_toc`]).
//! - [`render_to_html`](html::render_to_html) produces an escaped HTML
//!   fragment for direct injection, e.g. a live editor preview.
//!
//! Every operation is a pure function of its input — no state is held
//! between calls, so rendering per keystroke is safe.

#![deny(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod content;
pub mod html;
pub mod post;
pub mod segmenter;
pub mod site;
pub mod slug;
pub mod stats;

pub use content::{build_toc, ContentNode, HeadingLevel, TocEntry};
pub use html::{escape_html, render_to_html, PageOptions};
pub use post::{Post, PostError, PostMeta};
pub use site::{build_site, BuildError, BuildSummary, SitePost};

/// Render raw post body text to an ordered sequence of typed content nodes.
///
/// Delegates to [`segmenter::segment`]; exists as a distinct entry point for
/// callers that consume structured nodes rather than flat markup.
pub fn render_to_nodes(raw: &str) -> Vec<ContentNode> {
    segmenter::segment(raw)
}
