//! Line-oriented segmenter for the post markup dialect
//!
//! The dialect is deliberately small: `#` and `##` headings, and runs of
//! non-blank lines grouped into paragraphs by blank lines. It is not
//! CommonMark — `###` and deeper have no meaning and fall through to
//! paragraph text, and there is no inline formatting.

use crate::content::{ContentNode, HeadingLevel};

/// Classification of a single trimmed, non-empty source line.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// A `#` or `##` heading with its text
    Heading(HeadingLevel, &'a str),
    /// Anything else; joins the current paragraph
    Text(&'a str),
}

/// Classify one trimmed, non-empty line.
///
/// A heading is exactly one or two `#` characters followed by at least one
/// whitespace character and then text. Three or more `#`, or `#` without
/// trailing whitespace, is ordinary text — this matches the reference
/// behavior and is intentional.
fn classify(line: &str) -> LineKind<'_> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    // '#' is ASCII, so byte indexing past the run is safe
    let rest = &line[hashes..];

    let level = match hashes {
        1 => HeadingLevel::H1,
        2 => HeadingLevel::H2,
        _ => return LineKind::Text(line),
    };

    // The line is already right-trimmed, so whitespace after the hashes
    // guarantees non-empty heading text.
    if rest.starts_with(char::is_whitespace) {
        LineKind::Heading(level, rest.trim_start())
    } else {
        LineKind::Text(line)
    }
}

/// Split raw post body text into an ordered sequence of content nodes.
///
/// Single pass over the lines (`str::lines` handles both `\n` and `\r\n`),
/// buffering consecutive non-blank, non-heading lines and flushing them as
/// one space-joined paragraph on a blank line, a heading, or end of input.
/// Whitespace-only paragraphs are never emitted, so every paragraph node
/// carries non-empty text. Total over any input; the empty string yields an
/// empty sequence.
pub fn segment(raw: &str) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for raw_line in raw.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            flush(&mut buffer, &mut nodes);
            continue;
        }

        match classify(line) {
            LineKind::Heading(level, text) => {
                flush(&mut buffer, &mut nodes);
                nodes.push(ContentNode::heading(level, text));
            }
            LineKind::Text(text) => buffer.push(text),
        }
    }
    flush(&mut buffer, &mut nodes);

    nodes
}

/// Flush buffered paragraph lines as a single node; no-op when empty.
fn flush(buffer: &mut Vec<&str>, nodes: &mut Vec<ContentNode>) {
    if buffer.is_empty() {
        return;
    }
    // Buffered lines are trimmed and non-empty, so the joined text is too.
    let text = buffer.join(" ");
    buffer.clear();
    nodes.push(ContentNode::paragraph(text));
}
