//! Catalog error types

use thiserror::Error;

/// Errors raised while loading or validating the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog document is not valid JSON for the data model
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share an id
    #[error("Duplicate entry id '{0}'")]
    DuplicateEntryId(String),

    /// An entry declares a variant list with no variants
    #[error("Entry '{0}' has an empty variant list")]
    EmptyVariantList(String),

    /// Two variants of one entry share a name
    #[error("Entry '{entry}' has duplicate variant name '{name}'")]
    DuplicateVariantName { entry: String, name: String },
}
