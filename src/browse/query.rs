//! Query logic for catalog browsing
//!
//! This module contains the filter/group/search algorithm that turns the
//! catalog plus user-supplied criteria into a grouped view for display.
//! `query` is a pure function of its inputs: for fixed inputs the output
//! ordering is stable, with entries keeping their catalog-relative order
//! within each category.

use crate::catalog::models::{CatalogEntry, Category};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category filter: everything, or exactly one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// The sentinel "all" - no category restriction
    #[default]
    All,

    /// Restrict to a single category
    Only(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category.name()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}

/// One category's matching entries, in catalog order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub entries: Vec<&'a CatalogEntry>,
}

/// Entries partitioned by category for display
///
/// With `CategoryFilter::All` the view contains one group per non-empty
/// category in fixed category order; empty categories are absent, not
/// present with an empty list. With `CategoryFilter::Only` the view is a
/// single group for that category, kept even when it has no matches.
#[derive(Debug, Clone)]
pub struct GroupedView<'a> {
    pub groups: Vec<CategoryGroup<'a>>,
}

impl<'a> GroupedView<'a> {
    /// Total number of entries across all groups
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    /// True when no entry matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.entries.is_empty())
    }

    /// Iterate over all matching entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogEntry> + '_ {
        self.groups.iter().flat_map(|group| group.entries.iter().copied())
    }
}

/// Whether an entry matches a search term
///
/// Case-insensitive substring match against the entry name or any tag.
/// The empty term matches everything.
#[must_use]
pub fn matches_search(entry: &CatalogEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    entry.name.to_lowercase().contains(&needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// Compute the grouped view for (entries, search term, category filter)
///
/// An entry is included iff it matches both the search term and the
/// category filter. No side effects.
#[must_use]
pub fn query<'a>(
    entries: &'a [CatalogEntry],
    search_term: &str,
    filter: CategoryFilter,
) -> GroupedView<'a> {
    let matching: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| matches_search(entry, search_term))
        .filter(|entry| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == category,
        })
        .collect();

    let groups = match filter {
        CategoryFilter::All => Category::ALL
            .iter()
            .filter_map(|&category| {
                let entries: Vec<&CatalogEntry> = matching
                    .iter()
                    .copied()
                    .filter(|entry| entry.category == category)
                    .collect();

                (!entries.is_empty()).then_some(CategoryGroup { category, entries })
            })
            .collect(),
        CategoryFilter::Only(category) => vec![CategoryGroup {
            category,
            entries: matching,
        }],
    };

    GroupedView { groups }
}
