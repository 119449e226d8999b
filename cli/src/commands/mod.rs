pub mod check;
pub mod cli;
pub mod render;

use confkit_core::config::{self, CatalogSettings};
use confkit_core::ConfigError;

/// Settings from the file (or defaults and env), with command-line flags on
/// top.
pub fn resolve_settings(args: &cli::Args) -> Result<CatalogSettings, ConfigError> {
    let cfg = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load_default()?,
    };

    let mut settings = cfg.catalog;
    if let Some(dir) = &args.catalog_dir {
        settings.dir = dir.clone();
    }
    if let Some(locale) = &args.locale {
        settings.locale = Some(locale.clone());
    }
    settings.validate()?;

    tracing::debug!(
        "Catalog settings: dir={}, locale={:?}, fallback={:?}",
        settings.dir.display(),
        settings.locale,
        settings.fallback_locale
    );
    Ok(settings)
}
