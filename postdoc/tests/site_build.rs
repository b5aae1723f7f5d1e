//! Site build over a temporary directory tree

use postdoc::{build_site, BuildError};
use std::fs;
use std::path::Path;

fn write_post(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_build_writes_pages_and_index() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_post(
        input.path(),
        "lighting.md",
        "+++\ntitle = \"Choosing the Right Lighting\"\ndate = \"2024-06-01\"\ntags = [\"lighting\"]\n+++\n# Basics\n\nLayer your light sources.\n",
    );
    write_post(
        input.path(),
        "colors.md",
        "+++\ntitle = \"Color Palettes\"\ndate = \"2024-05-01\"\n+++\nStart from a neutral base.\n",
    );

    let summary = build_site(input.path(), output.path()).unwrap();

    assert_eq!(summary.posts.len(), 2);
    // Newest first
    assert_eq!(summary.posts[0].title, "Choosing the Right Lighting");
    assert_eq!(summary.posts[1].title, "Color Palettes");

    let lighting = fs::read_to_string(output.path().join("choosing-the-right-lighting.html")).unwrap();
    assert!(lighting.contains("<h1>Choosing the Right Lighting</h1>"));
    assert!(lighting.contains("<h2 id=\"basics\">Basics</h2>"));
    assert!(lighting.contains("2024-06-01"));

    assert!(output.path().join("color-palettes.html").exists());

    let index = fs::read_to_string(output.path().join("index.html")).unwrap();
    let first = index.find("choosing-the-right-lighting.html").unwrap();
    let second = index.find("color-palettes.html").unwrap();
    assert!(first < second, "index should list newest post first");
    assert!(index.contains("lighting"), "index should list post tags");
}

#[test]
fn test_build_keeps_traversal_slug_inside_output_dir() {
    let input = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();
    let output = workdir.path().join("site");

    write_post(
        input.path(),
        "sneaky.md",
        "+++\ntitle = \"Sneaky\"\nslug = \"../escaped\"\n+++\nBody.\n",
    );

    let summary = build_site(input.path(), &output).unwrap();

    assert_eq!(summary.posts[0].slug, "escaped");
    assert!(output.join("escaped.html").exists());
    assert!(
        !workdir.path().join("escaped.html").exists(),
        "page must not be written outside the output directory"
    );
}

#[test]
fn test_build_discovers_nested_sources() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let nested = input.path().join("2024");
    fs::create_dir_all(&nested).unwrap();
    write_post(&nested, "deep.md", "# Nested Post\n\nFound it.\n");
    write_post(input.path(), "notes.txt", "not a post");

    let summary = build_site(input.path(), output.path()).unwrap();
    assert_eq!(summary.posts.len(), 1);
    assert!(output.path().join("nested-post.html").exists());
}

#[test]
fn test_build_body_only_post_titles_from_heading() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_post(input.path(), "plain.md", "# From The Heading\n\nBody.\n");

    let summary = build_site(input.path(), output.path()).unwrap();
    assert_eq!(summary.posts[0].title, "From The Heading");
    assert_eq!(summary.posts[0].slug, "from-the-heading");
    assert_eq!(summary.posts[0].date, None);
}

#[test]
fn test_build_rejects_duplicate_slugs() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_post(input.path(), "a.md", "+++\ntitle = \"Same Title\"\n+++\nOne.\n");
    write_post(input.path(), "b.md", "+++\ntitle = \"Same Title\"\n+++\nTwo.\n");

    let err = build_site(input.path(), output.path()).unwrap_err();
    match err {
        BuildError::DuplicateSlug(slug) => assert_eq!(slug, "same-title"),
        other => panic!("expected DuplicateSlug, got {other:?}"),
    }
}

#[test]
fn test_build_surfaces_front_matter_errors_with_path() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_post(input.path(), "broken.md", "+++\ntitle = \"Broken\"\n");

    let err = build_site(input.path(), output.path()).unwrap_err();
    match err {
        BuildError::Post { path, .. } => {
            assert!(path.ends_with("broken.md"));
        }
        other => panic!("expected Post error, got {other:?}"),
    }
}
