//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for kitbook using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **list**: Grouped view of the whole catalog (default)
//! - **search**: Find components by name or tag, optionally per category
//! - **show**: Resolved metadata and source of one entry
//! - **export**: Bulk-copy selected entries to the clipboard
//! - **tags**: Every tag with usage count
//! - **categories**: The four categories with entry counts
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--catalog` flag overriding the configured catalog file
//! - Command aliases (e.g., `s` for `search`, `x` for `export`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kitbook - browse and export reusable UI building blocks
#[derive(Debug, Parser)]
#[command(name = "kitbook", version, about)]
pub struct Cli {
    /// Suppress informational output (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalog file to load (overrides the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the whole catalog grouped by category (default)
    #[command(visible_alias = "l")]
    List,

    /// Search components by name or tag
    #[command(visible_alias = "s")]
    Search {
        /// Search term (case-insensitive substring of name or tag)
        #[arg(value_name = "QUERY")]
        query: String,

        /// Restrict to one category, or "all"
        #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
        category: String,
    },

    /// Show one entry's resolved metadata and source code
    Show {
        /// Entry id
        #[arg(value_name = "ID")]
        id: String,

        /// Variant name to resolve (defaults to the first variant)
        #[arg(short = 'V', long, value_name = "NAME")]
        variant: Option<String>,

        /// Print the source without syntax highlighting
        #[arg(long)]
        plain: bool,
    },

    /// Bulk-export entries' code to the clipboard
    #[command(visible_alias = "x")]
    Export {
        /// Entry ids to export
        #[arg(value_name = "ID", required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Print the payload to stdout instead of the clipboard
        #[arg(long)]
        stdout: bool,
    },

    /// List every tag with its usage count
    Tags,

    /// List the four categories with entry counts
    Categories,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to `list`
    #[must_use]
    pub fn get_command(self) -> Commands {
        self.command.unwrap_or(Commands::List)
    }
}
