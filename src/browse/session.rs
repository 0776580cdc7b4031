//! Browse session - application state and pure event transitions
//!
//! The session owns an explicit, serializable state record (search term,
//! category filter, selection set, open entry) and applies events to it.
//! Side effects never happen here: clipboard writes and notifications are
//! returned as [`Effect`] descriptions and executed by the outer shell,
//! keeping the core synchronous and fully unit-testable.
//!
//! # State machine
//!
//! ```text
//! Closed ──open(entry)──▶ Open(entry, first variant name or "")
//!   ▲                        │ change_variant(name): set chosen name
//!   └──────── close ─────────┘
//! ```

use crate::browse::query::{self, CategoryFilter, GroupedView};
use crate::browse::resolve::{self, ResolvedView};
use crate::browse::selection::SelectionTracker;
use crate::catalog::models::CatalogEntry;
use crate::catalog::store::CatalogStore;
use crate::export;
use serde::{Deserialize, Serialize};

/// Detail view state: no entry open, or one entry with a chosen variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailState {
    #[default]
    Closed,
    Open {
        entry_id: String,
        /// Empty when the open entry has no variants
        chosen_variant: String,
    },
}

/// Serializable application state owned by the session controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub search_term: String,
    pub category_filter: CategoryFilter,
    pub selection: SelectionTracker,
    pub detail: DetailState,
}

/// UI-originated events the session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SetSearchTerm(String),
    SetCategoryFilter(CategoryFilter),
    ToggleSelect(String),
    OpenEntry(String),
    ChangeVariant(String),
    CloseDetail,
    /// Copy the open entry's resolved code
    CopyCurrent,
    /// Bulk-copy every selected entry
    CopySelected,
}

/// Effect descriptions for the outer shell to execute
///
/// The engine does not depend on their completion; clipboard failure is a
/// collaborator-level concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(String),
    Notify { title: String, description: String },
}

/// Browse session over a read-only catalog
pub struct BrowseSession<'a> {
    store: &'a CatalogStore,
    fence_lang: String,
    pub state: AppState,
}

impl<'a> BrowseSession<'a> {
    #[must_use]
    pub fn new(store: &'a CatalogStore) -> Self {
        Self {
            store,
            fence_lang: export::DEFAULT_FENCE_LANG.to_string(),
            state: AppState::default(),
        }
    }

    /// Override the fence language used for bulk payloads
    #[must_use]
    pub fn with_fence_lang(mut self, lang: impl Into<String>) -> Self {
        self.fence_lang = lang.into();
        self
    }

    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        self.store
    }

    /// Grouped view for the current search term and category filter
    #[must_use]
    pub fn grouped_view(&self) -> GroupedView<'a> {
        query::query(
            self.store.entries(),
            &self.state.search_term,
            self.state.category_filter,
        )
    }

    /// The open entry, if any
    #[must_use]
    pub fn open_entry(&self) -> Option<&'a CatalogEntry> {
        match &self.state.detail {
            DetailState::Closed => None,
            DetailState::Open { entry_id, .. } => self.store.get(entry_id),
        }
    }

    /// Resolved code/preview/path for the open entry under its chosen variant
    #[must_use]
    pub fn resolved(&self) -> Option<ResolvedView<'a>> {
        match &self.state.detail {
            DetailState::Closed => None,
            DetailState::Open {
                entry_id,
                chosen_variant,
            } => self
                .store
                .get(entry_id)
                .map(|entry| resolve::resolve(entry, chosen_variant)),
        }
    }

    /// Apply an event, returning the effects the shell must execute
    pub fn apply(&mut self, event: AppEvent) -> Vec<Effect> {
        match event {
            AppEvent::SetSearchTerm(term) => {
                self.state.search_term = term;
                Vec::new()
            }
            AppEvent::SetCategoryFilter(filter) => {
                self.state.category_filter = filter;
                Vec::new()
            }
            AppEvent::ToggleSelect(id) => {
                self.state.selection.toggle(id);
                Vec::new()
            }
            AppEvent::OpenEntry(id) => {
                if let Some(entry) = self.store.get(&id) {
                    self.state.detail = DetailState::Open {
                        entry_id: id,
                        chosen_variant: entry.first_variant_name().unwrap_or_default().to_string(),
                    };
                }
                Vec::new()
            }
            AppEvent::ChangeVariant(name) => {
                // Only valid while an entry is open
                if let DetailState::Open { chosen_variant, .. } = &mut self.state.detail {
                    *chosen_variant = name;
                }
                Vec::new()
            }
            AppEvent::CloseDetail => {
                self.state.detail = DetailState::Closed;
                Vec::new()
            }
            AppEvent::CopyCurrent => self.copy_current(),
            AppEvent::CopySelected => self.copy_selected(),
        }
    }

    fn copy_current(&self) -> Vec<Effect> {
        let Some(view) = self.resolved() else {
            return Vec::new();
        };

        vec![
            Effect::CopyToClipboard(export::format_single(view.code).to_string()),
            Effect::Notify {
                title: "Code copied!".to_string(),
                description: "The component code has been copied to your clipboard.".to_string(),
            },
        ]
    }

    fn copy_selected(&mut self) -> Vec<Effect> {
        // Caller contract: bulk export needs a non-empty selection. Refuse
        // rather than emit an empty payload.
        if self.state.selection.is_empty() {
            return Vec::new();
        }

        let entries = self.state.selection.selected_entries(self.store);
        let count = entries.len();
        let payload = export::format_bulk(&entries, &self.fence_lang);

        self.state.selection.clear();

        vec![
            Effect::CopyToClipboard(payload),
            Effect::Notify {
                title: "Components copied!".to_string(),
                description: format!("{count} components copied to clipboard in LLM format."),
            },
        ]
    }
}
