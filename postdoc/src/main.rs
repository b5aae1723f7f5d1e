//! postdoc - static renderer for blog post markup
//!
//! A CLI for rendering posts written in a restricted markup dialect
//! (two heading levels, blank-line paragraphs) to standalone HTML pages
//! or a small static site.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use cli::{Cli, Commands};
use postdoc::html::{render_page, PageOptions};
use postdoc::{build_site, build_toc, render_to_html, render_to_nodes, Post};

/// Main entry point for the postdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            fragment,
            no_toc,
            verbose,
        } => {
            init_logging(verbose);
            handle_render_command(&input, output.as_deref(), fragment, no_toc)?;
        }

        Commands::Build {
            input,
            output,
            verbose,
        } => {
            init_logging(verbose);
            handle_build_command(&input, &output)?;
        }

        Commands::Toc { input } => {
            init_logging(false);
            handle_toc_command(&input)?;
        }
    }

    Ok(())
}

/// Initialize logging; `--verbose` raises the filter to Info
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

/// Handle the render command
fn handle_render_command(
    input: &Path,
    output: Option<&Path>,
    fragment: bool,
    no_toc: bool,
) -> Result<()> {
    let post =
        Post::load(input).with_context(|| format!("Failed to load {}", input.display()))?;

    let html = if fragment {
        render_to_html(&post.body)
    } else {
        let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("post");
        let (date, tags) = match &post.meta {
            Some(meta) => (meta.date.clone(), meta.tags.clone()),
            None => (None, Vec::new()),
        };
        let options = PageOptions {
            title: post.display_title(stem),
            date,
            tags,
            include_toc: !no_toc,
        };
        render_page(&post.body, &options)
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

/// Handle the build command
fn handle_build_command(input: &Path, output: &Path) -> Result<()> {
    println!("Building site...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    let summary = build_site(input, output)
        .with_context(|| format!("Failed to build site from {}", input.display()))?;

    println!(
        "✓ Rendered {} posts to {}",
        summary.posts.len(),
        summary.output.display()
    );

    Ok(())
}

/// Handle the toc command
fn handle_toc_command(input: &Path) -> Result<()> {
    let post =
        Post::load(input).with_context(|| format!("Failed to load {}", input.display()))?;

    let nodes = render_to_nodes(&post.body);
    let toc = build_toc(&nodes);

    if toc.is_empty() {
        println!("(no headings)");
        return Ok(());
    }

    for entry in toc {
        let indent = if entry.level == 2 { "  " } else { "" };
        println!("{indent}{} -> #{}", entry.title, entry.anchor_id);
    }

    Ok(())
}
