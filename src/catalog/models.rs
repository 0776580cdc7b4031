//! Data models for the component catalog
//!
//! These are pure data structures with minimal logic. Direct field access is
//! used for comparisons and filtering (idiomatic Rust style). All catalog
//! data is read-only for the lifetime of the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed component category
///
/// The four values are closed: no other category is valid, and the order of
/// `Category::ALL` is the display order for grouped views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "UI")]
    Ui,
    Hooks,
    Providers,
    Pages,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Ui, Self::Hooks, Self::Providers, Self::Pages];

    /// Display name (matches the serialized form)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Hooks => "Hooks",
            Self::Providers => "Providers",
            Self::Pages => "Pages",
        }
    }

    /// Icon identifier for this category, resolved by table lookup
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ui => "layout",
            Self::Hooks => "zap",
            Self::Providers => "users",
            Self::Pages => "code",
        }
    }

    /// Terminal glyph shown next to category headings
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ui => "▣",
            Self::Hooks => "⚡",
            Self::Providers => "◈",
            Self::Pages => "▤",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ui" => Ok(Self::Ui),
            "hooks" => Ok(Self::Hooks),
            "providers" => Ok(Self::Providers),
            "pages" => Ok(Self::Pages),
            _ => Err(format!(
                "Unknown category '{s}' (expected one of: UI, Hooks, Providers, Pages)"
            )),
        }
    }
}

/// Opaque handle to a visual preview renderer
///
/// The engine never introspects or invokes the renderer; it only passes the
/// handle through to the presentation layer, which resolves the identifier
/// to an actual render unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Renderer identifier for the presentation layer
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A named sub-unit of a composite entry
///
/// Carries its own path and code; `preview` falls back to the parent
/// entry's preview when absent (field-level fallback, see `browse::resolve`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique within the parent entry's variant list
    pub name: String,

    /// Canonical source path for this variant
    pub file_path: String,

    /// Full source text of this variant
    pub code: String,

    /// Optional visual preview scoped to this variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewHandle>,
}

/// A cataloged reusable unit with metadata, source text, and optional preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique stable identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Fixed category
    pub category: Category,

    /// Tags in insertion order (preserved for display; not unique-enforced)
    pub tags: Vec<String>,

    /// Semantic-version-like string, display-only
    pub version: String,

    /// Canonical source path
    pub file_path: String,

    /// Full source text
    pub code: String,

    /// Optional visual preview; absent means this is a logic component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewHandle>,

    /// Optional ordered variants; when present the entry is a composite
    /// with one sub-page per variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
}

impl CatalogEntry {
    /// Whether this entry has nested variants
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.variants.is_some()
    }

    /// Name of the first variant, if any
    ///
    /// Opening an entry initializes the chosen variant to this value.
    #[must_use]
    pub fn first_variant_name(&self) -> Option<&str> {
        self.variants
            .as_deref()
            .and_then(|variants| variants.first())
            .map(|variant| variant.name.as_str())
    }

    /// Look up a variant by name
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants
            .as_deref()
            .and_then(|variants| variants.iter().find(|v| v.name == name))
    }

    /// Number of exported blocks this entry contributes to a bulk payload
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.variants.as_deref().map_or(1, <[Variant]>::len)
    }
}
