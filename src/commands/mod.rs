//! Command implementations for the kitbook CLI
//!
//! Each submodule owns one CLI command: it drives the engine in `browse`
//! and `export`, then formats results through `output`. Side effects
//! (clipboard, notifications) come out of the browse session as effect
//! descriptions and are executed here, in the shell.

pub mod export;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;
