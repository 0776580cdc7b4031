//! Catalog module - the immutable component catalog
//!
//! # Architecture
//!
//! - `models`: Core data types (`CatalogEntry`, `Variant`, `Category`, `PreviewHandle`)
//! - `store`: The validated, read-only entry collection and its JSON loader
//! - `error`: Load and validation failures
//!
//! The catalog is populated once at startup and never mutated; everything
//! downstream (query, selection, resolution, export) borrows from it.

pub mod error;
pub mod models;
pub mod store;

pub use error::CatalogError;
pub use models::{CatalogEntry, Category, PreviewHandle, Variant};
pub use store::CatalogStore;
