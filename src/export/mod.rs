//! Export formatting - serializing entries into a clipboard payload
//!
//! Bulk export emits one fenced block per exported source file: composite
//! entries contribute one block per variant in variant order, plain entries
//! exactly one. The code text is carried verbatim; only the final payload
//! is right-trimmed. Text construction cannot fail; performing the actual
//! clipboard write is the shell's job (`clipboard` submodule).

pub mod clipboard;

pub use clipboard::{ClipboardSink, SystemClipboard};

use crate::catalog::models::CatalogEntry;
use std::fmt::Write;

/// Fence language tag used when none is configured
pub const DEFAULT_FENCE_LANG: &str = "typescript";

/// Single-entry copy: identity pass-through of the resolved code
#[must_use]
pub fn format_single(code: &str) -> &str {
    code
}

/// Serialize entries into one bulk payload, in the order given
///
/// Block shape: a bold path header line, a fenced code region tagged with
/// `fence_lang`, and a blank separator line. An empty entry list yields an
/// empty string (the session controller refuses that case upstream).
#[must_use]
pub fn format_bulk(entries: &[&CatalogEntry], fence_lang: &str) -> String {
    let mut payload = String::new();

    for entry in entries {
        match entry.variants.as_deref() {
            Some(variants) => {
                for variant in variants {
                    push_block(&mut payload, &variant.file_path, &variant.code, fence_lang);
                }
            }
            None => push_block(&mut payload, &entry.file_path, &entry.code, fence_lang),
        }
    }

    payload.trim_end().to_string()
}

fn push_block(payload: &mut String, file_path: &str, code: &str, fence_lang: &str) {
    // Infallible for String
    let _ = write!(payload, "**{file_path}**\n```{fence_lang}\n{code}\n```\n\n");
}
