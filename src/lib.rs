//! Kitbook - a browsable catalog of reusable UI building blocks
//!
//! This library provides the catalog query and export engine behind the
//! kitbook CLI: an immutable in-memory catalog of components, a search and
//! grouping engine, multi-select bulk export, and variant resolution for
//! composite entries.

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod output;
pub mod preview;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum KitbookError {
    /// Catalog load or validation error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Entry id not present in the catalog
    #[error("No entry with id '{0}' in the catalog")]
    UnknownEntry(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
