use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::catalog::dir::{DirCatalog, DEFAULT_CACHE_CAPACITY};
use crate::errors::ConfigError;
use crate::locale::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,

    /// Locale for rendered messages. Unset means "take it from the
    /// environment".
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub fallback_locale: Option<String>,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("messages")
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
            locale: None,
            fallback_locale: None,
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl CatalogSettings {
    pub fn effective_locale(&self) -> Locale {
        match self.locale.as_deref() {
            Some(l) if !l.trim().is_empty() => Locale::parse(l),
            _ => Locale::from_env(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::in_section("catalog", "dir must not be empty"));
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::in_section(
                "catalog",
                "cache_capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn open_catalog(&self) -> Result<DirCatalog, ConfigError> {
        self.validate()?;
        let capacity = NonZeroUsize::new(self.cache_capacity).ok_or_else(|| {
            ConfigError::in_section("catalog", "cache_capacity must be greater than zero")
        })?;
        let catalog = DirCatalog::with_capacity(&self.dir, capacity);
        Ok(match self.fallback_locale.as_deref() {
            Some(l) if !l.trim().is_empty() => catalog.with_fallback_locale(Locale::parse(l)),
            _ => catalog,
        })
    }
}
