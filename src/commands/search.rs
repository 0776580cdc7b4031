//! Search command - find components by name or tag

use crate::KitbookError;
use crate::browse::query::{self, CategoryFilter};
use crate::catalog::CatalogStore;
use crate::output;

type Result<T> = std::result::Result<T, KitbookError>;

/// Execute the search command
///
/// # Errors
///
/// Returns `KitbookError::InvalidInput` when the category filter is neither
/// "all" nor one of the four category names.
pub fn execute(store: &CatalogStore, term: &str, category: &str, quiet: bool) -> Result<()> {
    let filter: CategoryFilter = category.parse().map_err(KitbookError::InvalidInput)?;

    let view = query::query(store.entries(), term, filter);

    if view.is_empty() {
        if !quiet {
            println!("{}", output::no_results_hint());
        }
        return Ok(());
    }

    for group in &view.groups {
        if group.entries.is_empty() {
            continue;
        }
        if !quiet {
            println!("{}", output::category_heading(group.category, group.entries.len()));
        }
        for entry in &group.entries {
            println!("{}", output::entry_line(entry, quiet));
        }
    }

    Ok(())
}
