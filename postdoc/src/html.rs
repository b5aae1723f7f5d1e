//! HTML rendering for post bodies
//!
//! Two front-ends share the segmenter: [`render_to_html`] produces a bare
//! fragment for embedding (the live-preview case), and [`render_page`] wraps
//! a post in a standalone HTML document with title, metadata line, optional
//! table of contents, and embedded CSS.

use crate::content::{build_toc, ContentNode};
use crate::segmenter::segment;
use crate::stats::reading_time_minutes;

/// Escape text for use as HTML element body content.
///
/// Replaces `&`, `<`, `>` — ampersand first, so the entities introduced by
/// the later replacements are not double-escaped. Quotes are deliberately
/// not escaped: output is only ever injected as element body content. Do not
/// reuse this for attribute values without adding quote escaping.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render raw post body text to an HTML fragment.
///
/// `heading1` renders as `<h2 id="…">`, `heading2` as `<h3 id="…">`
/// (the page's `<h1>` is reserved for the post title, outside this
/// fragment), paragraphs as `<p>`. Elements are concatenated with no
/// separators. Total over any input: the empty string renders to the empty
/// string, and malformed markup degrades to paragraph text.
pub fn render_to_html(raw: &str) -> String {
    render_fragment(&segment(raw))
}

/// Render already-segmented nodes to a fragment.
fn render_fragment(nodes: &[ContentNode]) -> String {
    let mut output = String::new();

    for node in nodes {
        match node {
            ContentNode::Heading {
                level,
                text,
                anchor_id,
            } => {
                let tag = level.html_tag();
                output.push_str(&format!(
                    "<{tag} id=\"{anchor_id}\">{}</{tag}>",
                    escape_html(text)
                ));
            }
            ContentNode::Paragraph { text } => {
                output.push_str(&format!("<p>{}</p>", escape_html(text)));
            }
        }
    }

    output
}

/// Presentation options for a standalone post page.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Post title, rendered as the page `<h1>` and `<title>`
    pub title: String,

    /// Publication date, shown verbatim in the metadata line
    pub date: Option<String>,

    /// Post tags, shown in the metadata line
    pub tags: Vec<String>,

    /// Render a table-of-contents nav before the body
    pub include_toc: bool,
}

/// Render a post body as a complete standalone HTML document.
pub fn render_page(raw: &str, options: &PageOptions) -> String {
    let nodes = segment(raw);
    let mut output = String::new();

    write_page_header(&mut output, &options.title);
    output.push_str("<body>\n");
    output.push_str("<article class=\"post\">\n");

    output.push_str(&format!("<h1>{}</h1>\n", escape_html(&options.title)));
    write_meta_line(&mut output, options, raw);

    if options.include_toc {
        write_toc(&mut output, &nodes);
    }

    output.push_str(&render_fragment(&nodes));
    output.push('\n');

    output.push_str("</article>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// Write the document head with embedded CSS.
pub(crate) fn write_page_header(output: &mut String, title: &str) {
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Write the date / reading time / tags line under the title.
fn write_meta_line(output: &mut String, options: &PageOptions, raw: &str) {
    let mut parts: Vec<String> = Vec::new();

    if let Some(ref date) = options.date {
        parts.push(escape_html(date));
    }

    let minutes = reading_time_minutes(raw);
    if minutes > 0 {
        parts.push(format!("{minutes} min read"));
    }

    if !options.tags.is_empty() {
        let tags: Vec<String> = options.tags.iter().map(|t| escape_html(t)).collect();
        parts.push(tags.join(", "));
    }

    if !parts.is_empty() {
        output.push_str(&format!(
            "<p class=\"post-meta\">{}</p>\n",
            parts.join(" &middot; ")
        ));
    }
}

/// Write the table-of-contents nav, indenting level-2 entries.
fn write_toc(output: &mut String, nodes: &[ContentNode]) {
    let toc = build_toc(nodes);
    if toc.is_empty() {
        return;
    }

    output.push_str("<nav class=\"toc\">\n<ul>\n");
    for entry in toc {
        let class = if entry.level == 2 { " class=\"toc-sub\"" } else { "" };
        output.push_str(&format!(
            "<li{class}><a href=\"#{}\">{}</a></li>\n",
            entry.anchor_id,
            escape_html(&entry.title)
        ));
    }
    output.push_str("</ul>\n</nav>\n");
}

/// Embedded stylesheet for standalone pages
const CSS_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto',
                 'Helvetica Neue', sans-serif;
    line-height: 1.6;
    color: #333;
    background-color: #f5f5f5;
    padding: 20px;
}

.post {
    max-width: 720px;
    margin: 0 auto;
    background: white;
    padding: 48px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    border-radius: 4px;
}

.post h1 {
    font-size: 2.2em;
    font-weight: 700;
    margin-bottom: 8px;
    color: #1a1a1a;
}

.post-meta {
    color: #777;
    font-size: 0.95em;
    margin-bottom: 32px;
}

.toc {
    margin-bottom: 32px;
    padding: 16px 24px;
    background-color: #f9f9f9;
    border-left: 4px solid #d6336c;
    border-radius: 4px;
}

.toc ul {
    list-style: none;
}

.toc a {
    color: #d6336c;
    text-decoration: none;
}

.toc a:hover {
    text-decoration: underline;
}

.toc-sub {
    padding-left: 20px;
}

.post h2 {
    font-size: 1.5em;
    margin-top: 32px;
    margin-bottom: 12px;
    color: #1a1a1a;
}

.post h3 {
    font-size: 1.2em;
    margin-top: 24px;
    margin-bottom: 8px;
    color: #1a1a1a;
}

.post p {
    margin-bottom: 16px;
}

.post-list {
    list-style: none;
}

.post-list li {
    margin-bottom: 16px;
}

.post-list a {
    font-size: 1.2em;
    color: #d6336c;
    text-decoration: none;
}

.post-list a:hover {
    text-decoration: underline;
}
"#;
