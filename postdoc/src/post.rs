//! Post source files: optional TOML front matter plus markup body
//!
//! A post file may open with a front matter block fenced by `+++` lines:
//!
//! ```text
//! +++
//! title = "Choosing the Right Lighting"
//! date = "2024-05-01"
//! tags = ["lighting", "interiors"]
//! +++
//! # A heading
//!
//! Body text.
//! ```
//!
//! Files without a leading fence are treated as body-only.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::content::ContentNode;
use crate::segmenter::segment;

/// Front matter fence line
const FENCE: &str = "+++";

/// Post metadata from the front matter block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMeta {
    /// Post title
    pub title: String,

    /// Publication date, kept as written (no date arithmetic is performed)
    pub date: Option<String>,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Output slug override; derived from the title when absent. Normalized
    /// like a title-derived slug before use — it ends up in filenames and
    /// hrefs.
    pub slug: Option<String>,
}

/// A parsed post source: metadata (if any) and the raw body text
#[derive(Debug, Clone)]
pub struct Post {
    /// Front matter metadata; `None` for body-only files
    pub meta: Option<PostMeta>,

    /// Raw body text, handed to the renderer as-is
    pub body: String,
}

/// Errors that can occur when loading or parsing a post source file
#[derive(Error, Debug)]
pub enum PostError {
    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unterminated front matter (missing closing '+++')")]
    UnterminatedFrontMatter,

    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] toml::de::Error),
}

impl Post {
    /// Split source text into front matter and body.
    ///
    /// The opening fence must be the first line; everything up to the
    /// closing fence is parsed as TOML. An opening fence without a closing
    /// one is an error. Sources not starting with a fence are body-only.
    pub fn parse(source: &str) -> Result<Self, PostError> {
        let first_is_fence = source.lines().next().map(|l| l.trim_end()) == Some(FENCE);
        if !first_is_fence {
            return Ok(Post {
                meta: None,
                body: source.to_string(),
            });
        }

        let mut front = String::new();
        let mut body = String::new();
        let mut closed = false;

        for line in source.lines().skip(1) {
            if !closed {
                if line.trim_end() == FENCE {
                    closed = true;
                    continue;
                }
                front.push_str(line);
                front.push('\n');
            } else {
                body.push_str(line);
                body.push('\n');
            }
        }

        if !closed {
            return Err(PostError::UnterminatedFrontMatter);
        }

        let meta: PostMeta = toml::from_str(&front)?;
        Ok(Post {
            meta: Some(meta),
            body,
        })
    }

    /// Load and parse a post source file.
    pub fn load(path: &Path) -> Result<Self, PostError> {
        let source = std::fs::read_to_string(path).map_err(|e| PostError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&source)
    }

    /// Title for display: front matter title, else the first heading's text,
    /// else the given fallback (typically the file stem).
    pub fn display_title(&self, fallback: &str) -> String {
        if let Some(ref meta) = self.meta {
            return meta.title.clone();
        }

        segment(&self.body)
            .into_iter()
            .find_map(|node| match node {
                ContentNode::Heading { text, .. } => Some(text),
                ContentNode::Paragraph { .. } => None,
            })
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter_and_body() {
        let source = "+++\ntitle = \"Hello\"\ndate = \"2024-05-01\"\ntags = [\"a\", \"b\"]\n+++\n# Heading\n\nBody.\n";
        let post = Post::parse(source).unwrap();

        let meta = post.meta.unwrap();
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.date.as_deref(), Some("2024-05-01"));
        assert_eq!(meta.tags, vec!["a", "b"]);
        assert_eq!(meta.slug, None);
        assert_eq!(post.body, "# Heading\n\nBody.\n");
    }

    #[test]
    fn test_parse_body_only_source() {
        let post = Post::parse("# Just a body\n\nText.").unwrap();
        assert!(post.meta.is_none());
        assert_eq!(post.body, "# Just a body\n\nText.");
    }

    #[test]
    fn test_parse_crlf_fences() {
        let source = "+++\r\ntitle = \"CRLF\"\r\n+++\r\nBody.\r\n";
        let post = Post::parse(source).unwrap();
        assert_eq!(post.meta.unwrap().title, "CRLF");
        assert_eq!(post.body, "Body.\n");
    }

    #[test]
    fn test_unterminated_front_matter_is_an_error() {
        let err = Post::parse("+++\ntitle = \"Oops\"\n").unwrap_err();
        assert!(matches!(err, PostError::UnterminatedFrontMatter));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = Post::parse("+++\ntitle = \n+++\nBody.").unwrap_err();
        assert!(matches!(err, PostError::FrontMatter(_)));
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let err = Post::parse("+++\ndate = \"2024-05-01\"\n+++\nBody.").unwrap_err();
        assert!(matches!(err, PostError::FrontMatter(_)));
    }

    #[test]
    fn test_fence_with_trailing_content_is_body_text() {
        let post = Post::parse("+++not a fence\ntext").unwrap();
        assert!(post.meta.is_none());
    }

    #[test]
    fn test_display_title_prefers_front_matter() {
        let post = Post::parse("+++\ntitle = \"Meta Title\"\n+++\n# Heading Title\n").unwrap();
        assert_eq!(post.display_title("stem"), "Meta Title");
    }

    #[test]
    fn test_display_title_falls_back_to_first_heading() {
        let post = Post::parse("Intro paragraph.\n\n# Heading Title\n").unwrap();
        assert_eq!(post.display_title("stem"), "Heading Title");
    }

    #[test]
    fn test_display_title_falls_back_to_stem() {
        let post = Post::parse("No headings here.").unwrap();
        assert_eq!(post.display_title("my-post"), "my-post");
    }
}
