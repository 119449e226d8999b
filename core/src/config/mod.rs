//! Settings for locating and querying message catalogs.
//!
//! - `types.rs` (data structures + defaults + validation)
//! - `load.rs`  (IO: file loading + env overrides)

mod load;
mod types;

pub use load::{load_default, load_from, DEFAULT_CONFIG_FILE};
pub use types::{AppConfig, CatalogSettings};

#[cfg(test)]
mod tests {
    use super::load::apply_overrides;
    use super::*;
    use crate::LocalizedError;
    use crate::{Locale, NoCatalog};
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_section_missing() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.catalog.dir, PathBuf::from("messages"));
        assert_eq!(cfg.catalog.cache_capacity, 64);
        assert!(cfg.catalog.locale.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[catalog]\ndir = \"i18n\"\nlocale = \"fr_CA\"\nfallback_locale = \"en\"\ncache_capacity = 8\n",
        )
        .unwrap();

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.catalog.dir, PathBuf::from("i18n"));
        assert_eq!(cfg.catalog.effective_locale(), Locale::parse("fr_CA"));
        assert_eq!(cfg.catalog.fallback_locale.as_deref(), Some("en"));
        assert_eq!(cfg.catalog.cache_capacity, 8);
    }

    #[test]
    fn test_zero_capacity_is_a_section_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[catalog]\ncache_capacity = 0\n").unwrap();

        let err = load_from(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Section [catalog]: cache_capacity must be greater than zero"
        );
    }

    #[test]
    fn test_unreadable_and_malformed_files_wrap_cause() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = load_from(&missing).unwrap_err();
        assert!(err.to_string().starts_with("cannot read "));
        assert!(err.cause().unwrap().downcast_ref::<std::io::Error>().is_some());

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[catalog\n").unwrap();
        let err = load_from(&bad).unwrap_err();
        assert!(err.to_string().starts_with("cannot parse "));
        assert!(err
            .cause()
            .unwrap()
            .downcast_ref::<toml::de::Error>()
            .is_some());
        assert!(err
            .messages_for(&Locale::ROOT, &NoCatalog)
            .starts_with("cannot parse "));
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let env: HashMap<&str, &str> = [
            ("CONFKIT_CATALOG_DIR", "/srv/messages"),
            ("CONFKIT_LOCALE", "  "),
            ("CONFKIT_FALLBACK_LOCALE", "de"),
        ]
        .into_iter()
        .collect();

        let mut cfg = AppConfig::default();
        cfg.catalog.locale = Some("ja".to_string());
        apply_overrides(&mut cfg, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(cfg.catalog.dir, PathBuf::from("/srv/messages"));
        assert_eq!(cfg.catalog.locale.as_deref(), Some("ja"));
        assert_eq!(cfg.catalog.fallback_locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_open_catalog_reads_bundles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app_en.toml"), "hello = \"Hello\"\n").unwrap();

        let settings = CatalogSettings {
            dir: dir.path().to_path_buf(),
            locale: Some("fr".to_string()),
            fallback_locale: Some("en".to_string()),
            cache_capacity: 2,
        };
        let catalog = settings.open_catalog().unwrap();
        let err = crate::ConfigError::localized("app", "hello", "hi");
        assert_eq!(err.message_for(&settings.effective_locale(), &catalog), "Hello");
    }
}
