// core/src/catalog/trait.rs
use std::sync::Arc;

use crate::errors::CatalogError;
use crate::locale::Locale;

/// Source of locale-specific message templates, addressed by catalog name and
/// key.
///
/// Implementations must be safe to query from several threads at once; error
/// values resolve their messages through a shared reference.
pub trait MessageCatalog: Send + Sync {
    fn lookup(&self, catalog: &str, locale: &Locale, key: &str) -> Result<String, CatalogError>;
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for &T {
    fn lookup(&self, catalog: &str, locale: &Locale, key: &str) -> Result<String, CatalogError> {
        (**self).lookup(catalog, locale, key)
    }
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for Box<T> {
    fn lookup(&self, catalog: &str, locale: &Locale, key: &str) -> Result<String, CatalogError> {
        (**self).lookup(catalog, locale, key)
    }
}

impl<T: MessageCatalog + ?Sized> MessageCatalog for Arc<T> {
    fn lookup(&self, catalog: &str, locale: &Locale, key: &str) -> Result<String, CatalogError> {
        (**self).lookup(catalog, locale, key)
    }
}

/// Catalog with no bundles. Every lookup misses, so localized errors render
/// their default message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl MessageCatalog for NoCatalog {
    fn lookup(&self, catalog: &str, locale: &Locale, _key: &str) -> Result<String, CatalogError> {
        Err(CatalogError::CatalogNotFound {
            catalog: catalog.to_string(),
            locale: locale.to_string(),
        })
    }
}
