// core/src/errors/catalog_error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {catalog} (locale {locale})")]
    CatalogNotFound { catalog: String, locale: String },

    #[error("key not found in catalog {catalog}: {key} (locale {locale})")]
    KeyNotFound {
        catalog: String,
        key: String,
        locale: String,
    },

    #[error("failed to read bundle: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bundle: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CatalogError {
    /// True for "nothing there" outcomes, as opposed to a bundle that exists
    /// but could not be read.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            CatalogError::CatalogNotFound { .. } | CatalogError::KeyNotFound { .. }
        )
    }
}
