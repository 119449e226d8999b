use confkit_core::config::CatalogSettings;
use confkit_core::{ConfigError, LocalizedError};

use super::cli::RenderArgs;

pub fn render(settings: &CatalogSettings, args: &RenderArgs) -> Result<String, ConfigError> {
    let catalog = settings.open_catalog()?;
    let locale = settings.effective_locale();

    let err = ConfigError::localized_with_params(
        args.catalog.as_str(),
        args.key.as_str(),
        args.default.as_str(),
        &args.params,
    );
    tracing::info!(catalog = %args.catalog, key = %args.key, %locale, "rendering message");
    Ok(err.message_for(&locale, &catalog))
}
