//! Browse module - catalog query, selection, and detail workflows
//!
//! This module provides the UI-agnostic engine behind browsing: filtering
//! and grouping entries, tracking multi-select state, resolving variants,
//! and driving the detail-view state machine. All side effects (clipboard,
//! notifications) are described as [`session::Effect`] values and executed
//! by the shell.
//!
//! # Architecture
//!
//! - `query`: Pure filter/group/search over the catalog
//! - `selection`: Toggle-based multi-select set
//! - `resolve`: Per-field variant fallback rules
//! - `session`: Application state record and event transitions

pub mod query;
pub mod resolve;
pub mod selection;
pub mod session;

pub use query::{CategoryFilter, CategoryGroup, GroupedView, matches_search, query};
pub use resolve::{ResolvedView, resolve};
pub use selection::SelectionTracker;
pub use session::{AppEvent, AppState, BrowseSession, DetailState, Effect};
