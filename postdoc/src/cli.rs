//! Command-line interface definitions for postdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the postdoc application
#[derive(Parser)]
#[command(name = "postdoc")]
#[command(version)]
#[command(about = "Static renderer for blog post markup", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for postdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Render a single post to a standalone HTML page
    Render {
        /// Input post file (markup with optional '+++' front matter)
        input: PathBuf,

        /// Output file path; writes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the rendered body fragment, without the page wrapper
        #[arg(long)]
        fragment: bool,

        /// Skip the table-of-contents nav
        #[arg(long)]
        no_toc: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Build a directory of posts into a static site
    Build {
        /// Input directory containing .md post sources
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output directory for the generated pages
        #[arg(short, long, default_value = "public")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the table of contents of a post
    Toc {
        /// Input post file
        input: PathBuf,
    },
}
