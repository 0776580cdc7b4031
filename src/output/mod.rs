//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including category headings, entry lines, and the notification sink
//! used after copy actions.

use crate::catalog::models::{CatalogEntry, Category};
use colored::Colorize;

/// Format a category heading with its glyph and match count
#[must_use]
pub fn category_heading(category: Category, count: usize) -> String {
    format!(
        "{} {} ({count})",
        category.glyph().cyan(),
        category.name().bold()
    )
}

/// Format an entry for list/search display
#[must_use]
pub fn entry_line(entry: &CatalogEntry, quiet: bool) -> String {
    if quiet {
        return entry.id.clone();
    }

    let mut line = format!(
        "  {} {} v{}",
        entry.id.green(),
        entry.name,
        entry.version.dimmed()
    );

    if let Some(variants) = entry.variants.as_deref() {
        line.push_str(&format!(" ({} variants)", variants.len()).dimmed().to_string());
    }

    if entry.preview.is_none() {
        line.push_str(&" [logic]".yellow().to_string());
    }

    if !entry.tags.is_empty() {
        line.push_str(&format!(" [{}]", entry.tags.join(", ")).dimmed().to_string());
    }

    line
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} component(s))")
    }
}

/// Render a notification (title, description) pair
#[must_use]
pub fn notification(title: &str, description: &str) -> String {
    format!("{} {description}", title.green().bold())
}

/// Print a notification effect unless quiet mode is on
pub fn notify(title: &str, description: &str, quiet: bool) {
    if !quiet {
        println!("{}", notification(title, description));
    }
}

/// Render the "nothing matched" hint
#[must_use]
pub fn no_results_hint() -> String {
    format!(
        "{}\n{}",
        "No components found".dimmed(),
        "Try adjusting your search or filter criteria".dimmed()
    )
}
