//! Kitbook CLI application entry point
//!
//! This is the main executable for the kitbook component catalog. It loads
//! the configured catalog document and exposes search, inspection, and bulk
//! export of component source code.
//!
//! # Usage
//!
//! ```bash
//! # List the whole catalog grouped by category (default command)
//! kitbook
//! kitbook list
//!
//! # Search by name or tag, optionally within one category
//! kitbook search button
//! kitbook search form -c Pages
//!
//! # Inspect one entry (pick a variant with -V)
//! kitbook show auth-pages -V Register
//!
//! # Bulk-export entries' code to the clipboard
//! kitbook export animated-button auth-pages
//!
//! # Print the export payload instead of using the clipboard
//! kitbook export auth-pages --stdout
//!
//! # Quiet mode (only output results)
//! kitbook -q search button
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/kitbook/config.toml` on Linux); it supplies the default
//! catalog path, fence language, and quiet/clipboard defaults.

use kitbook::{
    KitbookError,
    catalog::CatalogStore,
    cli::{Cli, Commands},
    commands,
    config::KitbookConfig,
    export::SystemClipboard,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, KitbookError>;

fn run() -> Result<()> {
    let config = KitbookConfig::load()?;

    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;

    let catalog_path: PathBuf = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| {
            KitbookError::InvalidInput(
                "No catalog file configured. Pass --catalog <FILE> or set catalog_path in the config."
                    .into(),
            )
        })?;

    let store = CatalogStore::load(&catalog_path)?;

    match cli.get_command() {
        Commands::List => commands::list::execute(&store, quiet),
        Commands::Search { query, category } => {
            commands::search::execute(&store, &query, &category, quiet)
        }
        Commands::Show { id, variant, plain } => {
            commands::show::execute(&store, &id, variant.as_deref(), plain, quiet)
        }
        Commands::Export { ids, stdout } => {
            let mut sink = SystemClipboard;
            let to_stdout = stdout || !config.use_clipboard;
            commands::export::execute(&store, &ids, &mut sink, to_stdout, &config.fence_lang, quiet)
        }
        Commands::Tags => commands::tags::execute_tags(&store, quiet),
        Commands::Categories => commands::tags::execute_categories(&store, quiet),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
