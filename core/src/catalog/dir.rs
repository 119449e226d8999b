use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use lru::LruCache;

use crate::errors::CatalogError;
use crate::locale::Locale;

use super::r#trait::MessageCatalog;
use super::search_chain;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

type Bundle = HashMap<String, String>;

/// Catalog backed by TOML bundle files under a root directory.
///
/// Catalog `a.b.Messages` in locale `fr_CA` lives at
/// `<root>/a/b/Messages_fr_CA.toml`; the root-locale bundle drops the suffix.
/// Nested tables flatten to dotted keys.
pub struct DirCatalog {
    root: PathBuf,
    fallback_locale: Option<Locale>,
    // `None` records a bundle file that does not exist.
    cache: Mutex<LruCache<PathBuf, Option<Arc<Bundle>>>>,
}

impl DirCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(root, capacity)
    }

    pub fn with_capacity(root: impl Into<PathBuf>, capacity: NonZeroUsize) -> Self {
        Self {
            root: root.into(),
            fallback_locale: None,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the bundle for `catalog` in `locale`. Catalog segments and
    /// the locale tag must each stay a single path component under the root;
    /// anything else is reported as a missing catalog.
    pub fn bundle_path(&self, catalog: &str, locale: &Locale) -> Result<PathBuf, CatalogError> {
        let mut segments: Vec<&str> = catalog.split('.').filter(|s| !s.is_empty()).collect();
        let base = segments.pop().unwrap_or("messages");
        let file = if locale.is_root() {
            format!("{base}.toml")
        } else {
            format!("{base}_{}.toml", locale.tag())
        };

        let mut path = self.root.clone();
        for seg in segments.into_iter().chain(std::iter::once(file.as_str())) {
            if !is_plain_component(seg) {
                tracing::warn!(%catalog, %locale, "Rejected bundle path segment: {}", seg);
                return Err(CatalogError::CatalogNotFound {
                    catalog: catalog.to_string(),
                    locale: locale.to_string(),
                });
            }
            path.push(seg);
        }
        Ok(path)
    }

    /// Every key visible to `locale`, with the template that a lookup would
    /// return for it.
    pub fn entries(
        &self,
        catalog: &str,
        locale: &Locale,
    ) -> Result<BTreeMap<String, String>, CatalogError> {
        let mut merged = BTreeMap::new();
        let mut saw_bundle = false;
        for candidate in search_chain(locale, self.fallback_locale.as_ref()).iter().rev() {
            let path = self.bundle_path(catalog, candidate)?;
            if let Some(bundle) = self.load(&path)? {
                saw_bundle = true;
                for (k, v) in bundle.iter() {
                    merged.insert(k.clone(), v.clone());
                }
            }
        }
        if !saw_bundle {
            return Err(CatalogError::CatalogNotFound {
                catalog: catalog.to_string(),
                locale: locale.to_string(),
            });
        }
        Ok(merged)
    }

    fn load(&self, path: &Path) -> Result<Option<Arc<Bundle>>, CatalogError> {
        {
            let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = cache.get(path) {
                return Ok(hit.clone());
            }
        }

        let loaded = match std::fs::read_to_string(path) {
            Ok(s) => {
                let table: toml::Table = toml::from_str(&s).map_err(|e| CatalogError::Parse {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                let mut bundle = Bundle::new();
                flatten_table("", &table, &mut bundle, path);
                tracing::debug!(
                    "Loaded bundle: {}, keys: {}",
                    path.display(),
                    bundle.len()
                );
                Some(Arc::new(bundle))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        cache.put(path.to_path_buf(), loaded.clone());
        Ok(loaded)
    }
}

impl std::fmt::Debug for DirCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirCatalog")
            .field("root", &self.root)
            .field("fallback_locale", &self.fallback_locale)
            .finish_non_exhaustive()
    }
}

impl MessageCatalog for DirCatalog {
    fn lookup(&self, catalog: &str, locale: &Locale, key: &str) -> Result<String, CatalogError> {
        let mut saw_bundle = false;
        let mut last_error = None;
        for candidate in search_chain(locale, self.fallback_locale.as_ref()) {
            // A broken candidate must not hide the key in a less specific bundle.
            let loaded = self
                .bundle_path(catalog, &candidate)
                .and_then(|path| self.load(&path));
            let bundle = match loaded {
                Ok(Some(bundle)) => bundle,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(%catalog, locale = %candidate, "Skipping bundle: {}", e);
                    last_error = Some(e);
                    continue;
                }
            };
            saw_bundle = true;
            if let Some(template) = bundle.get(key) {
                return Ok(template.clone());
            }
        }

        if saw_bundle {
            return Err(CatalogError::KeyNotFound {
                catalog: catalog.to_string(),
                key: key.to_string(),
                locale: locale.to_string(),
            });
        }
        Err(last_error.unwrap_or_else(|| CatalogError::CatalogNotFound {
            catalog: catalog.to_string(),
            locale: locale.to_string(),
        }))
    }
}

fn is_plain_component(seg: &str) -> bool {
    if seg.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(seg).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn flatten_table(prefix: &str, table: &toml::Table, out: &mut Bundle, path: &Path) {
    for (k, v) in table {
        let key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        match v {
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            toml::Value::Integer(i) => {
                out.insert(key, i.to_string());
            }
            toml::Value::Float(f) => {
                out.insert(key, f.to_string());
            }
            toml::Value::Boolean(b) => {
                out.insert(key, b.to_string());
            }
            toml::Value::Table(t) => flatten_table(&key, t, out, path),
            other => {
                tracing::warn!(
                    "Skipping non-scalar message {} in bundle {} ({})",
                    key,
                    path.display(),
                    other.type_str()
                );
            }
        }
    }
}
