//! Show command - resolved metadata and source of one entry

use crate::KitbookError;
use crate::browse::resolve;
use crate::catalog::CatalogStore;
use crate::preview::CodeRenderer;
use colored::Colorize;

type Result<T> = std::result::Result<T, KitbookError>;

/// Execute the show command
///
/// Resolves the entry under the chosen variant (or its first variant when
/// none is given) and prints metadata plus source code.
///
/// # Errors
///
/// Returns `KitbookError::UnknownEntry` when the id is not in the catalog.
pub fn execute(
    store: &CatalogStore,
    id: &str,
    variant: Option<&str>,
    plain: bool,
    quiet: bool,
) -> Result<()> {
    let entry = store
        .get(id)
        .ok_or_else(|| KitbookError::UnknownEntry(id.to_string()))?;

    // Opening an entry defaults to its first variant
    let chosen = variant
        .or_else(|| entry.first_variant_name())
        .unwrap_or_default();
    let view = resolve::resolve(entry, chosen);

    if !quiet {
        println!(
            "{} {} {}",
            entry.category.glyph().cyan(),
            entry.name.bold(),
            format!("v{}", entry.version).dimmed()
        );
        println!("  {}", entry.description);
        println!("  {} {}", "path:".dimmed(), view.file_path.blue());
        if !entry.tags.is_empty() {
            println!("  {} {}", "tags:".dimmed(), entry.tags.join(", "));
        }
        if let Some(variants) = entry.variants.as_deref() {
            let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
            println!("  {} {}", "variants:".dimmed(), names.join(", "));
        }
        match view.preview {
            Some(handle) => println!("  {} {}", "preview:".dimmed(), handle.id()),
            None => println!("  {}", "no visual preview (logic component)".yellow()),
        }
        println!();
    }

    if plain {
        println!("{}", view.code);
    } else {
        let renderer = CodeRenderer::new();
        print!("{}", renderer.render(view.code, view.file_path));
    }

    Ok(())
}
