use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

use super::types::AppConfig;

pub const DEFAULT_CONFIG_FILE: &str = "confkit.toml";

/// Reads `confkit.toml` from the working directory when present, then applies
/// `CONFKIT_*` environment overrides.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = if Path::new(DEFAULT_CONFIG_FILE).exists() {
        read_file(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        AppConfig::default()
    };

    apply_overrides(&mut cfg, |key| std::env::var(key).ok());
    cfg.catalog.validate()?;
    Ok(cfg)
}

/// Reads an explicit settings file. Environment overrides are not applied.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let cfg = read_file(path)?;
    cfg.catalog.validate()?;
    Ok(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::with_cause(format!("cannot read {}", path.display()), e)
    })?;
    toml::from_str::<AppConfig>(&s)
        .map_err(|e| ConfigError::with_cause(format!("cannot parse {}", path.display()), e))
}

pub(crate) fn apply_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_blank("CONFKIT_CATALOG_DIR") {
        cfg.catalog.dir = PathBuf::from(v);
    }
    if let Some(v) = non_blank("CONFKIT_LOCALE") {
        cfg.catalog.locale = Some(v);
    }
    if let Some(v) = non_blank("CONFKIT_FALLBACK_LOCALE") {
        cfg.catalog.fallback_locale = Some(v);
    }
}
