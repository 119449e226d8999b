use std::collections::HashMap;

use crate::errors::CatalogError;
use crate::locale::Locale;

use super::r#trait::MessageCatalog;
use super::search_chain;

/// Catalog held entirely in memory. Mostly useful for tests and for
/// applications that embed their messages.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    bundles: HashMap<(String, Locale), HashMap<String, String>>,
    fallback_locale: Option<Locale>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    pub fn insert(
        &mut self,
        catalog: impl Into<String>,
        locale: Locale,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.bundles
            .entry((catalog.into(), locale))
            .or_default()
            .insert(key.into(), template.into())
    }

    pub fn with_message(
        mut self,
        catalog: impl Into<String>,
        locale: Locale,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(catalog, locale, key, template);
        self
    }
}

impl MessageCatalog for MemoryCatalog {
    fn lookup(&self, catalog: &str, locale: &Locale, key: &str) -> Result<String, CatalogError> {
        let mut saw_bundle = false;
        for candidate in search_chain(locale, self.fallback_locale.as_ref()) {
            let Some(bundle) = self.bundles.get(&(catalog.to_string(), candidate)) else {
                continue;
            };
            saw_bundle = true;
            if let Some(template) = bundle.get(key) {
                return Ok(template.clone());
            }
        }

        if saw_bundle {
            Err(CatalogError::KeyNotFound {
                catalog: catalog.to_string(),
                key: key.to_string(),
                locale: locale.to_string(),
            })
        } else {
            Err(CatalogError::CatalogNotFound {
                catalog: catalog.to_string(),
                locale: locale.to_string(),
            })
        }
    }
}
