//! Selection tracking for bulk export
//!
//! Holds the set of currently checked entry ids. Selection is id-based and
//! independent per entry: toggling one id never affects another. The set is
//! cleared after a successful bulk export.

use crate::catalog::models::CatalogEntry;
use crate::catalog::store::CatalogStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of selected entry ids with toggle semantics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTracker {
    selected: HashSet<String>,
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for an id
    ///
    /// Unknown ids may be toggled; the UI only ever toggles ids present in
    /// the catalog. Returns true when the id is selected after the call.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Empty the set; called after a successful bulk export
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The selected entries in catalog order
    ///
    /// This is the order used for bulk export. Selected ids with no catalog
    /// counterpart are skipped.
    #[must_use]
    pub fn selected_entries<'a>(&self, store: &'a CatalogStore) -> Vec<&'a CatalogEntry> {
        store
            .entries()
            .iter()
            .filter(|entry| self.selected.contains(&entry.id))
            .collect()
    }
}
