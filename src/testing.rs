//! Testing utilities for kitbook
//!
//! This module provides fixture builders for catalog entries and a small
//! sample catalog shared across unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::models::{CatalogEntry, Category, PreviewHandle, Variant};
use crate::catalog::store::CatalogStore;

/// Build a plain entry with sensible defaults
#[must_use]
pub fn entry(id: &str, name: &str, category: Category) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} component"),
        category,
        tags: Vec::new(),
        version: "1.0.0".to_string(),
        file_path: format!("src/{id}.tsx"),
        code: format!("// {id}"),
        preview: None,
        variants: None,
    }
}

/// Build an entry carrying the given variant list
#[must_use]
pub fn entry_with_variants(
    id: &str,
    name: &str,
    category: Category,
    variants: Vec<Variant>,
) -> CatalogEntry {
    let mut base = entry(id, name, category);
    base.variants = Some(variants);
    base
}

/// Build a variant without a preview
#[must_use]
pub fn variant(name: &str, file_path: &str, code: &str) -> Variant {
    Variant {
        name: name.to_string(),
        file_path: file_path.to_string(),
        code: code.to_string(),
        preview: None,
    }
}

/// A small catalog mirroring the kind of seed data the app ships with
#[must_use]
pub fn sample_entries() -> Vec<CatalogEntry> {
    let mut animated_button = entry("animated-button", "Animated Button", Category::Ui);
    animated_button.tags = vec!["button".into(), "animation".into(), "interactive".into()];
    animated_button.file_path = "src/components/AnimatedButton.tsx".into();
    animated_button.code = "export const AnimatedButton = () => <button/>;".into();
    animated_button.preview = Some(PreviewHandle::new("animatedButtonDemo"));

    let mut glass_card = entry("glass-card", "Glass Card", Category::Ui);
    glass_card.tags = vec!["card".into(), "glassmorphism".into()];
    glass_card.file_path = "src/components/GlassCard.tsx".into();
    glass_card.preview = Some(PreviewHandle::new("glassCardDemo"));

    let mut use_local_storage = entry("use-local-storage", "useLocalStorage", Category::Hooks);
    use_local_storage.tags = vec!["storage".into(), "persistence".into(), "state".into()];
    use_local_storage.file_path = "src/hooks/useLocalStorage.ts".into();

    let mut theme_provider = entry("theme-provider", "ThemeProvider", Category::Providers);
    theme_provider.tags = vec!["theme".into(), "context".into()];
    theme_provider.file_path = "src/providers/ThemeProvider.tsx".into();

    let mut auth_pages = entry_with_variants(
        "auth-pages",
        "Auth Pages",
        Category::Pages,
        vec![
            Variant {
                name: "Login".into(),
                file_path: "src/pages/auth/Login.tsx".into(),
                code: "export const Login = () => <form/>;".into(),
                preview: None,
            },
            Variant {
                name: "Register".into(),
                file_path: "src/pages/auth/Register.tsx".into(),
                code: "export const Register = () => <form/>;".into(),
                preview: None,
            },
        ],
    );
    auth_pages.tags = vec!["auth".into(), "forms".into()];
    auth_pages.file_path = "src/pages/auth".into();

    vec![
        animated_button,
        glass_card,
        use_local_storage,
        theme_provider,
        auth_pages,
    ]
}

/// Validated store over [`sample_entries`]
///
/// # Panics
///
/// Panics if the sample data violates catalog invariants (fixture bug).
#[must_use]
pub fn sample_store() -> CatalogStore {
    CatalogStore::new(sample_entries()).expect("sample catalog is valid")
}
