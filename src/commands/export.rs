//! Export command - bulk-copy entries' code
//!
//! Drives the browse session: toggles the requested ids into the selection,
//! fires the copy-selected event, and executes the resulting effects
//! (clipboard write, notification). Export order is catalog order, exactly
//! as in interactive browsing.

use crate::KitbookError;
use crate::browse::session::{AppEvent, BrowseSession, Effect};
use crate::catalog::CatalogStore;
use crate::export::ClipboardSink;
use crate::output;

type Result<T> = std::result::Result<T, KitbookError>;

/// Execute the export command
///
/// # Errors
///
/// Returns `KitbookError::UnknownEntry` for an id not in the catalog, or
/// `KitbookError::InvalidInput` when the clipboard write fails.
pub fn execute(
    store: &CatalogStore,
    ids: &[String],
    sink: &mut dyn ClipboardSink,
    to_stdout: bool,
    fence_lang: &str,
    quiet: bool,
) -> Result<()> {
    let mut session = BrowseSession::new(store).with_fence_lang(fence_lang);

    for id in ids {
        if store.get(id).is_none() {
            return Err(KitbookError::UnknownEntry(id.clone()));
        }
        session.apply(AppEvent::ToggleSelect(id.clone()));
    }

    let effects = session.apply(AppEvent::CopySelected);

    for effect in &effects {
        match effect {
            Effect::CopyToClipboard(payload) => {
                if to_stdout {
                    println!("{payload}");
                } else {
                    sink.write(payload).map_err(KitbookError::InvalidInput)?;
                }
            }
            Effect::Notify { title, description } => {
                output::notify(title, description, quiet || to_stdout);
            }
        }
    }

    Ok(())
}
