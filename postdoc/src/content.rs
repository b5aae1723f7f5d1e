//! Typed content model produced by the segmenter
//!
//! Heading and paragraph nodes are separate enum variants rather than one
//! shape with an optional anchor, so consumers match exhaustively on the
//! node kind.

use itertools::Itertools;

/// Heading depth in the source dialect.
///
/// The dialect supports exactly two levels; anything deeper falls through to
/// paragraph text in the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// A `#` heading
    H1,
    /// A `##` heading
    H2,
}

impl HeadingLevel {
    /// Depth as written in the source (1 or 2).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }

    /// HTML tag this level renders as.
    ///
    /// Source levels shift down by one: the page's `<h1>` is reserved for
    /// the post title, which sits outside the rendered fragment.
    pub fn html_tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h2",
            HeadingLevel::H2 => "h3",
        }
    }
}

/// A block-level content unit of a rendered post body.
///
/// Nodes are freshly allocated per render call, never cached or mutated, and
/// appear in the same order as their source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// A section title carrying a derived anchor id
    Heading {
        /// Source heading depth
        level: HeadingLevel,
        /// Trimmed, unescaped heading text
        text: String,
        /// Anchor id derived from `text` via [`slugify`](crate::slug::slugify)
        anchor_id: String,
    },

    /// A block of grouped running text with no anchor
    Paragraph {
        /// Trimmed, unescaped paragraph text; never empty
        text: String,
    },
}

impl ContentNode {
    /// Build a heading node, deriving its anchor id from the text.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        let text = text.into();
        let anchor_id = crate::slug::slugify(&text);
        ContentNode::Heading {
            level,
            text,
            anchor_id,
        }
    }

    /// Build a paragraph node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph { text: text.into() }
    }

    /// The node's source text, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            ContentNode::Heading { text, .. } | ContentNode::Paragraph { text } => text,
        }
    }
}

/// One entry of a post's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor id the entry links to
    pub anchor_id: String,
    /// Source heading depth (1 or 2)
    pub level: u8,
}

/// Project the heading nodes of a rendered body into a table of contents.
///
/// Entries keep document order. Anchors are not de-duplicated: if two
/// headings slugify to the same id, in-page links land on the first
/// occurrence. Collisions are reported via `log::warn!` so the ambiguity is
/// visible without altering the rendered output.
pub fn build_toc(nodes: &[ContentNode]) -> Vec<TocEntry> {
    let entries: Vec<TocEntry> = nodes
        .iter()
        .filter_map(|node| match node {
            ContentNode::Heading {
                level,
                text,
                anchor_id,
            } => Some(TocEntry {
                title: text.clone(),
                anchor_id: anchor_id.clone(),
                level: level.depth(),
            }),
            ContentNode::Paragraph { .. } => None,
        })
        .collect();

    let mut ids: Vec<&str> = entries.iter().map(|e| e.anchor_id.as_str()).collect();
    ids.sort_unstable();
    for (a, b) in ids.iter().tuple_windows() {
        if a == b {
            log::warn!("duplicate heading anchor '{a}': in-page links will target the first occurrence");
        }
    }

    entries
}
