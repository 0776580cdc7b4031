//! Variant resolution for composite entries
//!
//! Given an entry and an optionally chosen variant name, compute the
//! effective code/preview/path. Each field falls back to the parent entry's
//! value independently: a stale variant name degrades every field to the
//! entry's own value, and a found variant without its own preview still
//! inherits the entry's preview (field-level, not whole-record, fallback).

use crate::catalog::models::{CatalogEntry, PreviewHandle};

/// Effective display data for an entry under a chosen variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedView<'a> {
    pub code: &'a str,
    pub file_path: &'a str,
    pub preview: Option<&'a PreviewHandle>,
}

/// Resolve an entry's current code/preview/path
///
/// An empty `chosen_variant` or an entry without variants resolves to the
/// entry's own fields. An unknown variant name is a non-fatal lookup miss
/// that silently degrades to the entry's fields.
#[must_use]
pub fn resolve<'a>(entry: &'a CatalogEntry, chosen_variant: &str) -> ResolvedView<'a> {
    let variant = if chosen_variant.is_empty() {
        None
    } else {
        entry.variant(chosen_variant)
    };

    ResolvedView {
        code: variant.map_or(entry.code.as_str(), |v| v.code.as_str()),
        file_path: variant.map_or(entry.file_path.as_str(), |v| v.file_path.as_str()),
        preview: variant
            .and_then(|v| v.preview.as_ref())
            .or(entry.preview.as_ref()),
    }
}
