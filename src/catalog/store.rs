//! Catalog store - the immutable set of entries
//!
//! The store is populated once at startup from a catalog document and never
//! mutated. Validation of the data-model invariants happens here, before
//! any query runs against the entries.

use crate::catalog::error::CatalogError;
use crate::catalog::models::{CatalogEntry, Category};
use std::collections::HashSet;
use std::path::Path;

/// Immutable, validated collection of catalog entries
///
/// Entry order is the catalog document's order; grouped views preserve the
/// relative order of entries within each category.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
}

impl CatalogStore {
    /// Build a store from already-deserialized entries, validating invariants
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when an entry id is duplicated, a variant list
    /// is empty, or a variant name repeats within one entry.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();

        for entry in &entries {
            if !seen_ids.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateEntryId(entry.id.clone()));
            }

            if let Some(variants) = entry.variants.as_deref() {
                if variants.is_empty() {
                    return Err(CatalogError::EmptyVariantList(entry.id.clone()));
                }

                let mut seen_names = HashSet::new();
                for variant in variants {
                    if !seen_names.insert(variant.name.as_str()) {
                        return Err(CatalogError::DuplicateVariantName {
                            entry: entry.id.clone(),
                            name: variant.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { entries })
    }

    /// Deserialize and validate a catalog from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on parse failure or invariant violation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on read failure, parse failure, or invariant
    /// violation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every tag with its usage count, sorted alphabetically
    #[must_use]
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for entry in &self.entries {
            for tag in &entry.tags {
                match counts.iter_mut().find(|(name, _)| name == tag) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((tag.clone(), 1)),
                }
            }
        }

        counts.sort_by(|a, b| a.0.cmp(&b.0));
        counts
    }

    /// Entry count per category, in fixed category order
    #[must_use]
    pub fn category_counts(&self) -> [(Category, usize); 4] {
        Category::ALL.map(|category| {
            let count = self
                .entries
                .iter()
                .filter(|entry| entry.category == category)
                .count();
            (category, count)
        })
    }
}
