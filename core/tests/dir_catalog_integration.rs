//! Integration tests for TOML-directory catalogs
//!
//! These tests lay bundles out on disk and resolve ConfigError messages
//! through a DirCatalog.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use confkit_core::{CatalogError, ConfigError, DirCatalog, Locale, LocalizedError, MessageCatalog};

/// Helper to write a bundle file, creating parent directories
fn write_bundle(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("bundle has a parent")).expect("Failed to create dir");
    fs::write(path, body).expect("Failed to write bundle");
}

fn setup_catalog() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_bundle(
        dir.path(),
        "org/app/Errors.toml",
        r#"
missing = "missing value for {0}"
[section]
unknown = "unknown section {0}"
"#,
    );
    write_bundle(
        dir.path(),
        "org/app/Errors_de.toml",
        r#"
missing = "Wert fehlt für {0}"
"#,
    );
    write_bundle(
        dir.path(),
        "org/app/Errors_de_AT.toml",
        r#"
[section]
unknown = "Abschnitt {0} unbekannt"
"#,
    );
    dir
}

/// Test: most specific bundle wins, missing keys fall back to parents
#[test]
fn test_locale_chain_resolution() {
    let dir = setup_catalog();
    let catalog = DirCatalog::new(dir.path());

    let missing = ConfigError::localized_with_params("org.app.Errors", "missing", "missing {0}", ["host"]);
    let unknown =
        ConfigError::localized_with_params("org.app.Errors", "section.unknown", "unknown {0}", ["db"]);

    let at = Locale::parse("de_AT");
    assert_eq!(missing.message_for(&at, &catalog), "Wert fehlt für host");
    assert_eq!(unknown.message_for(&at, &catalog), "Abschnitt db unbekannt");

    let de = Locale::parse("de_DE");
    assert_eq!(unknown.message_for(&de, &catalog), "unknown section db");

    assert_eq!(missing.message_for(&Locale::parse("it"), &catalog), "missing value for host");
}

/// Test: missing catalog directory falls back to the default message
#[test]
fn test_absent_catalog_uses_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let catalog = DirCatalog::new(dir.path().join("nowhere"));

    let err = ConfigError::localized("org.app.Errors", "missing", "fallback text");
    assert_eq!(err.message_for(&Locale::parse("de"), &catalog), "fallback text");

    let lookup = catalog.lookup("org.app.Errors", &Locale::ROOT, "missing");
    assert!(matches!(lookup, Err(CatalogError::CatalogNotFound { .. })));
}

/// Test: a malformed bundle is skipped and less specific bundles still answer
#[test]
fn test_malformed_bundle_falls_back() {
    let dir = setup_catalog();
    write_bundle(dir.path(), "org/app/Errors_fr.toml", "missing = [unclosed\n");
    let catalog = DirCatalog::new(dir.path());

    let err = ConfigError::localized_with_params("org.app.Errors", "missing", "missing {0}", ["port"]);
    assert_eq!(
        err.message_for(&Locale::parse("fr"), &catalog),
        "missing value for port"
    );
    assert_eq!(
        catalog
            .lookup("org.app.Errors", &Locale::parse("fr_FR"), "missing")
            .expect("root bundle should answer"),
        "missing value for {0}"
    );
}

/// Test: catalog names cannot reach files outside the root
#[test]
fn test_catalog_name_cannot_escape_root() {
    let dir = setup_catalog();
    let root = dir.path().join("empty");
    fs::create_dir(&root).unwrap();
    let catalog = DirCatalog::new(&root);

    // Unchecked, the absolute segment would replace the root when joined.
    let escaping = format!("x.{}/org/app/Errors", dir.path().display());
    let lookup = catalog.lookup(&escaping, &Locale::ROOT, "missing");
    assert!(matches!(lookup, Err(CatalogError::CatalogNotFound { .. })));

    let err = ConfigError::localized(escaping, "missing", "kept default");
    assert_eq!(err.message_for(&Locale::ROOT, &catalog), "kept default");
}

/// Test: fallback locale is searched before the root bundle
#[test]
fn test_fallback_locale() {
    let dir = setup_catalog();
    let catalog = DirCatalog::new(dir.path()).with_fallback_locale(Locale::parse("de"));

    let err = ConfigError::localized_with_params("org.app.Errors", "missing", "missing {0}", ["user"]);
    assert_eq!(err.message_for(&Locale::parse("sv"), &catalog), "Wert fehlt für user");
}

/// Test: entries merges the visible keys for a locale
#[test]
fn test_entries_view() {
    let dir = setup_catalog();
    let catalog = DirCatalog::new(dir.path());

    let entries = catalog
        .entries("org.app.Errors", &Locale::parse("de_AT"))
        .expect("Failed to list entries");
    let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["missing", "section.unknown"]);
    assert_eq!(entries["missing"], "Wert fehlt für {0}");
    assert_eq!(entries["section.unknown"], "Abschnitt {0} unbekannt");

    let err = catalog.entries("org.app.Nothing", &Locale::ROOT).unwrap_err();
    assert!(err.is_missing());
}

/// Test: one catalog serves lookups from several threads
#[test]
fn test_concurrent_lookups() {
    let dir = setup_catalog();
    let catalog = std::sync::Arc::new(DirCatalog::new(dir.path()));

    let handles: Vec<_> = ["de", "de_AT", "en", "fr"]
        .into_iter()
        .map(|tag| {
            let catalog = catalog.clone();
            std::thread::spawn(move || {
                let err = ConfigError::localized_with_params(
                    "org.app.Errors",
                    "missing",
                    "missing {0}",
                    ["x"],
                );
                err.message_for(&Locale::parse(tag), &catalog)
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            "Wert fehlt für x",
            "Wert fehlt für x",
            "missing value for x",
            "missing value for x"
        ]
    );
}
