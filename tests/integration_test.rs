//! Integration tests for kitbook
//!
//! These tests verify end-to-end functionality by loading catalogs from
//! temporary files and driving the complete browse/export workflows.

use kitbook::KitbookError;
use kitbook::browse::query::CategoryFilter;
use kitbook::browse::session::{AppEvent, BrowseSession, Effect};
use kitbook::catalog::{CatalogStore, Category};
use kitbook::commands;
use kitbook::export::clipboard::MemoryClipboard;
use std::io::Write;

const CATALOG_JSON: &str = r#"[
    {
        "id": "animated-button",
        "name": "Animated Button",
        "description": "A button with hover and press animations",
        "category": "UI",
        "tags": ["button", "animation", "interactive"],
        "version": "1.2.0",
        "filePath": "src/components/AnimatedButton.tsx",
        "code": "export const AnimatedButton = () => <button/>;",
        "preview": "animatedButtonDemo"
    },
    {
        "id": "use-local-storage",
        "name": "useLocalStorage",
        "description": "Persist state to localStorage",
        "category": "Hooks",
        "tags": ["storage", "persistence", "state"],
        "version": "1.0.0",
        "filePath": "src/hooks/useLocalStorage.ts",
        "code": "export const useLocalStorage = () => {};"
    },
    {
        "id": "auth-pages",
        "name": "Auth Pages",
        "description": "Login and registration pages",
        "category": "Pages",
        "tags": ["auth", "forms"],
        "version": "2.0.0",
        "filePath": "src/pages/auth",
        "code": "// auth index",
        "variants": [
            {
                "name": "Login",
                "filePath": "src/pages/auth/Login.tsx",
                "code": "export const Login = () => <form/>;"
            },
            {
                "name": "Register",
                "filePath": "src/pages/auth/Register.tsx",
                "code": "export const Register = () => <form/>;"
            }
        ]
    }
]"#;

/// Helper: write the fixture catalog to a temp file and load it
fn load_fixture_catalog() -> CatalogStore {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();
    CatalogStore::load(file.path()).unwrap()
}

#[test]
fn test_load_catalog_from_file() {
    let store = load_fixture_catalog();

    assert_eq!(store.len(), 3);
    let button = store.get("animated-button").unwrap();
    assert_eq!(button.category, Category::Ui);
    assert_eq!(button.preview.as_ref().unwrap().id(), "animatedButtonDemo");

    let auth = store.get("auth-pages").unwrap();
    assert_eq!(auth.first_variant_name(), Some("Login"));
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let duplicated = format!(
        "[{0},{0}]",
        r#"{
            "id": "twin",
            "name": "Twin",
            "description": "",
            "category": "UI",
            "tags": [],
            "version": "1.0.0",
            "filePath": "src/Twin.tsx",
            "code": ""
        }"#
    );

    let err = CatalogStore::from_json(&duplicated).unwrap_err();
    assert!(err.to_string().contains("Duplicate entry id 'twin'"));
}

#[test]
fn test_grouped_query_over_loaded_catalog() {
    let store = load_fixture_catalog();
    let session = BrowseSession::new(&store);

    let view = session.grouped_view();
    let categories: Vec<Category> = view.groups.iter().map(|g| g.category).collect();
    // Providers has no entries and is absent from the grouped view
    assert_eq!(categories, vec![Category::Ui, Category::Hooks, Category::Pages]);
    assert_eq!(view.entry_count(), 3);
}

#[test]
fn test_search_and_category_filter_via_session() {
    let store = load_fixture_catalog();
    let mut session = BrowseSession::new(&store);

    session.apply(AppEvent::SetSearchTerm("AUTH".into()));
    session.apply(AppEvent::SetCategoryFilter(CategoryFilter::Only(Category::Pages)));

    let view = session.grouped_view();
    let ids: Vec<&str> = view.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["auth-pages"]);
}

#[test]
fn test_detail_flow_resolves_variants() {
    let store = load_fixture_catalog();
    let mut session = BrowseSession::new(&store);

    session.apply(AppEvent::OpenEntry("auth-pages".into()));
    assert_eq!(session.resolved().unwrap().file_path, "src/pages/auth/Login.tsx");

    session.apply(AppEvent::ChangeVariant("Register".into()));
    assert_eq!(
        session.resolved().unwrap().code,
        "export const Register = () => <form/>;"
    );

    // Stale variant name degrades every field to the parent entry's
    session.apply(AppEvent::ChangeVariant("Forgotten".into()));
    let view = session.resolved().unwrap();
    assert_eq!(view.file_path, "src/pages/auth");
    assert_eq!(view.code, "// auth index");
}

#[test]
fn test_bulk_export_end_to_end() {
    let store = load_fixture_catalog();
    let mut session = BrowseSession::new(&store);

    session.apply(AppEvent::ToggleSelect("auth-pages".into()));
    session.apply(AppEvent::ToggleSelect("animated-button".into()));

    let effects = session.apply(AppEvent::CopySelected);

    let mut sink = MemoryClipboard::default();
    let mut notified = None;
    for effect in effects {
        match effect {
            Effect::CopyToClipboard(payload) => sink.contents = Some(payload),
            Effect::Notify { description, .. } => notified = Some(description),
        }
    }

    let payload = sink.contents.unwrap();

    // Catalog order: animated-button first, then both auth variants
    let button_pos = payload.find("**src/components/AnimatedButton.tsx**").unwrap();
    let login_pos = payload.find("**src/pages/auth/Login.tsx**").unwrap();
    let register_pos = payload.find("**src/pages/auth/Register.tsx**").unwrap();
    assert!(button_pos < login_pos && login_pos < register_pos);

    assert!(payload.contains("```typescript\nexport const Login = () => <form/>;\n```"));
    assert_eq!(payload, payload.trim_end());

    // Two entries exported (three blocks), selection cleared
    assert_eq!(notified.unwrap(), "2 components copied to clipboard in LLM format.");
    assert!(session.state.selection.is_empty());
}

#[test]
fn test_export_command_with_memory_sink() {
    let store = load_fixture_catalog();
    let mut sink = MemoryClipboard::default();

    commands::export::execute(
        &store,
        &["use-local-storage".to_string()],
        &mut sink,
        false,
        "tsx",
        true,
    )
    .unwrap();

    assert_eq!(
        sink.contents.unwrap(),
        "**src/hooks/useLocalStorage.ts**\n```tsx\nexport const useLocalStorage = () => {};\n```"
    );
}

#[test]
fn test_export_command_rejects_unknown_id() {
    let store = load_fixture_catalog();
    let mut sink = MemoryClipboard::default();

    let err = commands::export::execute(
        &store,
        &["ghost".to_string()],
        &mut sink,
        false,
        "tsx",
        true,
    )
    .unwrap_err();

    assert!(matches!(err, KitbookError::UnknownEntry(id) if id == "ghost"));
}
