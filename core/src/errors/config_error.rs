// core/src/errors/config_error.rs
use std::error::Error;

use thiserror::Error;

use crate::catalog::MessageCatalog;
use crate::locale::Locale;

use super::catalog_error::CatalogError;
use super::nested_error::{
    downcast_localized, BoxError, CatalogMessage, LocalizedError, MessageSource, NestedError,
};

/// Signals a problem in configuration data or its processing.
///
/// The message is either literal text, or a catalog name, key and default
/// message that are resolved only when a caller asks for the message in a
/// given locale. Either kind may wrap the error that caused it.
///
/// ```
/// use confkit_core::{ConfigError, Locale, LocalizedError, MemoryCatalog};
///
/// let catalog = MemoryCatalog::new()
///     .with_message("app", Locale::parse("fr"), "db.port", "port invalide : {0}");
/// let err = ConfigError::localized_with_params("app", "db.port", "bad port: {0}", ["99999"]);
///
/// assert_eq!(err.message_for(&Locale::parse("fr_FR"), &catalog), "port invalide : 99999");
/// assert_eq!(err.to_string(), "bad port: 99999");
/// ```
#[derive(Debug, Default, Error)]
#[error(transparent)]
pub struct ConfigError {
    inner: NestedError,
}

impl ConfigError {
    /// An error with no message and no cause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `cause`; the message is taken from the cause.
    pub fn from_cause(cause: impl Into<BoxError>) -> Self {
        Self::build(MessageSource::Empty, Some(cause.into()))
    }

    pub fn msg(message: impl Into<String>) -> Self {
        Self::build(MessageSource::Literal(message.into()), None)
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::build(MessageSource::Literal(message.into()), Some(cause.into()))
    }

    /// Wraps a cause that is itself localized, so that `messages_for` and
    /// `report_for` resolve its message in the caller's locale too.
    pub fn with_localized_cause<E>(message: impl Into<MessageSource>, cause: E) -> Self
    where
        E: LocalizedError + Send + Sync,
    {
        Self {
            inner: NestedError::new_localized(message.into(), cause),
        }
    }

    /// `Section [<section>]: <message>`
    pub fn in_section(section: &str, message: &str) -> Self {
        Self::msg(format!("Section [{section}]: {message}"))
    }

    pub fn localized(
        catalog_name: impl Into<String>,
        message_key: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self::localized_full(
            catalog_name,
            message_key,
            default_message,
            Vec::<String>::new(),
            None,
        )
    }

    pub fn localized_with_params<I>(
        catalog_name: impl Into<String>,
        message_key: impl Into<String>,
        default_message: impl Into<String>,
        params: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self::localized_full(catalog_name, message_key, default_message, params, None)
    }

    pub fn localized_with_cause(
        catalog_name: impl Into<String>,
        message_key: impl Into<String>,
        default_message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::localized_full(
            catalog_name,
            message_key,
            default_message,
            Vec::<String>::new(),
            Some(cause.into()),
        )
    }

    pub fn localized_full<I>(
        catalog_name: impl Into<String>,
        message_key: impl Into<String>,
        default_message: impl Into<String>,
        params: I,
        cause: Option<BoxError>,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let message = CatalogMessage::new(catalog_name, message_key, default_message, params);
        Self::build(MessageSource::Catalog(message), cause)
    }

    fn build(message: MessageSource, cause: Option<BoxError>) -> Self {
        Self {
            inner: NestedError::with_localizer(message, cause, downcast_localized::<ConfigError>),
        }
    }

    /// The wrapped cause, exactly as it was supplied.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.cause()
    }

    pub fn into_cause(self) -> Option<BoxError> {
        self.inner.into_cause()
    }

    pub fn catalog_message(&self) -> Option<&CatalogMessage> {
        match self.inner.message_source() {
            MessageSource::Catalog(m) => Some(m),
            _ => None,
        }
    }
}

impl LocalizedError for ConfigError {
    fn message_source(&self) -> &MessageSource {
        self.inner.message_source()
    }

    fn message_for(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> String {
        self.inner.message_for(locale, catalog)
    }

    fn localized_source(&self) -> Option<&dyn LocalizedError> {
        self.inner.localized_source()
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::from_cause(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::from_cause(e)
    }
}

impl From<CatalogError> for ConfigError {
    fn from(e: CatalogError) -> Self {
        ConfigError::from_cause(e)
    }
}
