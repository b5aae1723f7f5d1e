//! End-to-end rendering scenarios through the public API

use postdoc::{build_toc, render_to_html, render_to_nodes, ContentNode, HeadingLevel};

#[test]
fn test_node_render_classifies_document() {
    let nodes = render_to_nodes("# Title\n\nBody text here.\n\n## Sub\n\nMore text.");

    assert_eq!(
        nodes,
        vec![
            ContentNode::heading(HeadingLevel::H1, "Title"),
            ContentNode::paragraph("Body text here."),
            ContentNode::heading(HeadingLevel::H2, "Sub"),
            ContentNode::paragraph("More text."),
        ]
    );
}

#[test]
fn test_toc_projection_from_rendered_nodes() {
    let nodes = render_to_nodes("# Intro\n\ntext\n\n## Detail One\n\n## Detail Two\n\n# Wrap Up");
    let toc = build_toc(&nodes);

    let entries: Vec<(u8, &str, &str)> = toc
        .iter()
        .map(|e| (e.level, e.title.as_str(), e.anchor_id.as_str()))
        .collect();

    assert_eq!(
        entries,
        vec![
            (1, "Intro", "intro"),
            (2, "Detail One", "detail-one"),
            (2, "Detail Two", "detail-two"),
            (1, "Wrap Up", "wrap-up"),
        ]
    );
}

#[test]
fn test_html_render_known_document() {
    let html = render_to_html("# A\n\nHello & welcome.\n\n## B\n\n<script>");
    assert_eq!(
        html,
        "<h2 id=\"a\">A</h2><p>Hello &amp; welcome.</p><h3 id=\"b\">B</h3><p>&lt;script&gt;</p>"
    );
}

#[test]
fn test_empty_input_both_front_ends() {
    assert!(render_to_nodes("").is_empty());
    assert_eq!(render_to_html(""), "");
}

#[test]
fn test_repeated_renders_are_identical() {
    // The renderer holds no state between calls (live-preview use case)
    let raw = "# Draft\n\ntyping away...\n\n## notes";
    assert_eq!(render_to_html(raw), render_to_html(raw));
    assert_eq!(render_to_nodes(raw), render_to_nodes(raw));
}

#[test]
fn test_duplicate_headings_keep_colliding_anchors() {
    let nodes = render_to_nodes("## FAQ\n\n## FAQ");
    let toc = build_toc(&nodes);
    assert_eq!(toc.len(), 2);
    assert_eq!(toc[0].anchor_id, "faq");
    assert_eq!(toc[1].anchor_id, "faq");
}
