//! List command - the whole catalog grouped by category

use crate::KitbookError;
use crate::browse::query::{self, CategoryFilter};
use crate::catalog::CatalogStore;
use crate::output;

type Result<T> = std::result::Result<T, KitbookError>;

/// Execute the list command
pub fn execute(store: &CatalogStore, quiet: bool) -> Result<()> {
    let view = query::query(store.entries(), "", CategoryFilter::All);

    if view.is_empty() {
        if !quiet {
            println!("Catalog is empty.");
        }
        return Ok(());
    }

    for group in &view.groups {
        if !quiet {
            println!("{}", output::category_heading(group.category, group.entries.len()));
        }
        for entry in &group.entries {
            println!("{}", output::entry_line(entry, quiet));
        }
        if !quiet {
            println!();
        }
    }

    Ok(())
}
