//! Tags and categories commands - catalog vocabulary summaries

use crate::KitbookError;
use crate::catalog::CatalogStore;
use crate::output;

type Result<T> = std::result::Result<T, KitbookError>;

/// Execute the tags command
pub fn execute_tags(store: &CatalogStore, quiet: bool) -> Result<()> {
    let counts = store.tag_counts();

    if counts.is_empty() {
        if !quiet {
            println!("No tags in the catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in catalog:");
    }
    for (tag, count) in counts {
        println!("{}", output::tag_with_count(&tag, count, quiet));
    }

    Ok(())
}

/// Execute the categories command
pub fn execute_categories(store: &CatalogStore, quiet: bool) -> Result<()> {
    for (category, count) in store.category_counts() {
        if quiet {
            println!("{category}");
        } else {
            println!("{}", output::category_heading(category, count));
        }
    }

    Ok(())
}
