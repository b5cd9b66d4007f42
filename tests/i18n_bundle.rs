use std::fs;

use storefront::Translator;
use tempfile::TempDir;

const BUNDLE: &str = r#"{
    "entity": {
        "action": { "delete": "Delete", "cancel": "Cancel" },
        "delete": { "title": "Confirm delete operation" }
    },
    "storefrontApp": {
        "book": {
            "home": { "title": "Books" },
            "delete": { "question": "Are you sure you want to delete Book {{ id }}?" }
        }
    }
}"#;

#[test]
fn nested_keys_resolve() {
    let i18n = Translator::from_json(BUNDLE).unwrap();
    assert_eq!(i18n.get("entity.action.delete"), Some("Delete"));
    assert_eq!(i18n.get("storefrontApp.book.home.title"), Some("Books"));
}

#[test]
fn missing_keys_fall_back_inline() {
    let i18n = Translator::from_json(BUNDLE).unwrap();
    assert_eq!(i18n.get("storefrontApp.book.home.notFound"), None);
    assert_eq!(
        i18n.translate("storefrontApp.book.home.notFound", "No Books found"),
        "No Books found"
    );
}

#[test]
fn empty_bundle_always_falls_back() {
    let i18n = Translator::empty();
    assert_eq!(i18n.translate("entity.action.cancel", "Cancel"), "Cancel");
}

#[test]
fn placeholders_interpolate_into_resolved_text() {
    let i18n = Translator::from_json(BUNDLE).unwrap();
    let question = i18n.translate_with(
        "storefrontApp.book.delete.question",
        &[("id", "42".to_string())],
        "fallback",
    );
    assert_eq!(question, "Are you sure you want to delete Book 42?");
}

#[test]
fn placeholders_interpolate_into_the_fallback_too() {
    let i18n = Translator::empty();
    let question = i18n.translate_with(
        "storefrontApp.book.delete.question",
        &[("id", "42".to_string())],
        "Delete Book {{ id }}?",
    );
    assert_eq!(question, "Delete Book 42?");
}

#[test]
fn bundle_loads_from_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("en.json");
    fs::write(&path, BUNDLE).unwrap();

    let i18n = Translator::from_file(&path).unwrap();
    assert_eq!(i18n.get("entity.delete.title"), Some("Confirm delete operation"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Translator::from_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Translator::from_json("{ not json").unwrap_err();
    assert!(err.to_string().contains("parse"));
}
