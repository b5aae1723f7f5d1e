//! Static site builder
//!
//! Walks an input directory for `.md` post sources, renders each to a
//! standalone page, and writes an index listing the posts newest-first.

use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::html::{escape_html, render_page, write_page_header, PageOptions};
use crate::post::{Post, PostError};
use crate::slug::slugify;
use crate::stats::reading_time_minutes;

/// A post as it appears in the built site
#[derive(Debug, Clone)]
pub struct SitePost {
    /// Output slug; the page is written to `<slug>.html`
    pub slug: String,

    /// Display title
    pub title: String,

    /// Publication date, if any
    pub date: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// Estimated reading time of the body
    pub reading_minutes: usize,
}

/// Errors that can occur during a site build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to load {path}: {source}", path = .path.display())]
    Post {
        path: PathBuf,
        #[source]
        source: PostError,
    },

    #[error("duplicate output slug '{0}': two posts share a title or slug")]
    DuplicateSlug(String),

    #[error("failed to write {path}: {source}", path = .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a completed build
#[derive(Debug)]
pub struct BuildSummary {
    /// Rendered posts, in index order (newest first)
    pub posts: Vec<SitePost>,

    /// Output directory
    pub output: PathBuf,
}

/// Render every post source under `input` into `output`.
///
/// Writes one `<slug>.html` per post plus an `index.html` listing. Posts are
/// ordered by date descending (undated posts last), then by title. Two posts
/// resolving to the same output slug abort the build.
pub fn build_site(input: &Path, output: &Path) -> Result<BuildSummary, BuildError> {
    let sources = discover_sources(input);
    log::info!(
        "discovered {} post sources under {}",
        sources.len(),
        input.display()
    );

    // Load and render posts (optionally in parallel)
    #[cfg(feature = "parallel")]
    let rendered: Result<Vec<_>, BuildError> =
        sources.par_iter().map(|path| render_post(path)).collect();

    #[cfg(not(feature = "parallel"))]
    let rendered: Result<Vec<_>, BuildError> =
        sources.iter().map(|path| render_post(path)).collect();

    let mut rendered = rendered?;

    // Reject colliding output slugs before anything is written
    let mut slugs: Vec<&str> = rendered.iter().map(|(post, _)| post.slug.as_str()).collect();
    slugs.sort_unstable();
    if let Some((slug, _)) = slugs.iter().tuple_windows().find(|(a, b)| a == b) {
        return Err(BuildError::DuplicateSlug((*slug).to_string()));
    }

    // Newest first; undated posts sort last
    rendered.sort_by(|(a, _), (b, _)| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.title.cmp(&b.title))
    });

    std::fs::create_dir_all(output).map_err(|e| BuildError::Write {
        path: output.to_path_buf(),
        source: e,
    })?;

    for (post, html) in &rendered {
        let page_path = output.join(format!("{}.html", post.slug));
        std::fs::write(&page_path, html).map_err(|e| BuildError::Write {
            path: page_path.clone(),
            source: e,
        })?;
        log::info!("wrote {}", page_path.display());
    }

    let posts: Vec<SitePost> = rendered.into_iter().map(|(post, _)| post).collect();

    let index_path = output.join("index.html");
    std::fs::write(&index_path, render_index(&posts)).map_err(|e| BuildError::Write {
        path: index_path.clone(),
        source: e,
    })?;
    log::info!("wrote {}", index_path.display());

    Ok(BuildSummary {
        posts,
        output: output.to_path_buf(),
    })
}

/// Discover post sources: every `.md` file under the root, sorted by name.
fn discover_sources(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path().is_file() && e.path().extension().and_then(|s| s.to_str()) == Some("md")
        })
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Load one source file and render its standalone page.
fn render_post(path: &Path) -> Result<(SitePost, String), BuildError> {
    let post = Post::load(path).map_err(|e| BuildError::Post {
        path: path.to_path_buf(),
        source: e,
    })?;

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("post");
    let title = post.display_title(stem);
    let slug = output_slug(&post, stem);

    let (date, tags) = match &post.meta {
        Some(meta) => (meta.date.clone(), meta.tags.clone()),
        None => (None, Vec::new()),
    };

    let options = PageOptions {
        title: title.clone(),
        date: date.clone(),
        tags: tags.clone(),
        include_toc: true,
    };
    let html = render_page(&post.body, &options);

    let site_post = SitePost {
        slug,
        title,
        date,
        tags,
        reading_minutes: reading_time_minutes(&post.body),
    };

    Ok((site_post, html))
}

/// Output slug: explicit front matter slug, else the title, else the file
/// stem when neither yields anything.
///
/// The override is normalized through [`slugify`] like a title, since the
/// slug becomes both an output filename and an href: path separators,
/// quotes, and markup must never reach either.
fn output_slug(post: &Post, stem: &str) -> String {
    let derived = match post.meta.as_ref().and_then(|m| m.slug.as_deref()) {
        Some(slug) => {
            let safe = slugify(slug);
            if safe != slug {
                log::warn!("front matter slug '{slug}' normalized to '{safe}'");
            }
            safe
        }
        None => slugify(&post.display_title(stem)),
    };

    if derived.is_empty() {
        stem.to_string()
    } else {
        derived
    }
}

/// Render the index page listing all posts.
fn render_index(posts: &[SitePost]) -> String {
    let mut output = String::new();

    write_page_header(&mut output, "Posts");
    output.push_str("<body>\n");
    output.push_str("<article class=\"post\">\n");
    output.push_str("<h1>Posts</h1>\n");
    output.push_str("<ul class=\"post-list\">\n");

    for post in posts {
        output.push_str(&format!(
            "<li><a href=\"{}.html\">{}</a>",
            post.slug,
            escape_html(&post.title)
        ));

        let mut parts: Vec<String> = Vec::new();
        if let Some(ref date) = post.date {
            parts.push(escape_html(date));
        }
        if post.reading_minutes > 0 {
            parts.push(format!("{} min read", post.reading_minutes));
        }
        if !post.tags.is_empty() {
            parts.push(post.tags.iter().map(|t| escape_html(t)).join(", "));
        }
        if !parts.is_empty() {
            output.push_str(&format!(
                "<br><span class=\"post-meta\">{}</span>",
                parts.join(" &middot; ")
            ));
        }

        output.push_str("</li>\n");
    }

    output.push_str("</ul>\n");
    output.push_str("</article>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}
