// core/src/errors/nested_error.rs
use std::error::Error;
use std::fmt;

use crate::catalog::{MessageCatalog, NoCatalog};
use crate::format::format_message;
use crate::locale::Locale;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Recovers the localized view of a boxed cause whose concrete type was known
/// when the error was built.
pub(crate) type Localizer =
    for<'a> fn(&'a (dyn Error + Send + Sync + 'static)) -> Option<&'a dyn LocalizedError>;

pub(crate) fn downcast_localized<'a, E: LocalizedError>(
    e: &'a (dyn Error + Send + Sync + 'static),
) -> Option<&'a dyn LocalizedError> {
    e.downcast_ref::<E>().map(|l| l as &dyn LocalizedError)
}

/// A message to be looked up in a catalog when the locale is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMessage {
    catalog_name: String,
    message_key: String,
    default_message: String,
    params: Vec<String>,
}

impl CatalogMessage {
    pub fn new<I>(
        catalog_name: impl Into<String>,
        message_key: impl Into<String>,
        default_message: impl Into<String>,
        params: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        Self {
            catalog_name: catalog_name.into(),
            message_key: message_key.into(),
            default_message: default_message.into(),
            params: params.into_iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Looks the key up for `locale` and expands it. Any lookup or expansion
    /// failure falls back to the default message; this never fails.
    pub fn resolve(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> String {
        let template = match catalog.lookup(&self.catalog_name, locale, &self.message_key) {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(
                    catalog = %self.catalog_name,
                    key = %self.message_key,
                    %locale,
                    "message lookup failed, using default: {}",
                    e
                );
                return self.default_text();
            }
        };

        match self.expand(&template) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(
                    catalog = %self.catalog_name,
                    key = %self.message_key,
                    %locale,
                    "message template invalid, using default: {}",
                    e
                );
                self.default_text()
            }
        }
    }

    /// The default message, expanded with the params when there are any.
    pub fn default_text(&self) -> String {
        self.expand(&self.default_message)
            .unwrap_or_else(|_| self.default_message.clone())
    }

    fn expand(&self, template: &str) -> Result<String, super::FormatError> {
        if self.params.is_empty() {
            return Ok(template.to_string());
        }
        format_message(template, &self.params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MessageSource {
    #[default]
    Empty,
    Literal(String),
    Catalog(CatalogMessage),
}

impl From<&str> for MessageSource {
    fn from(s: &str) -> Self {
        MessageSource::Literal(s.to_string())
    }
}

impl From<String> for MessageSource {
    fn from(s: String) -> Self {
        MessageSource::Literal(s)
    }
}

impl From<CatalogMessage> for MessageSource {
    fn from(m: CatalogMessage) -> Self {
        MessageSource::Catalog(m)
    }
}

/// Errors whose top-level message depends on a locale and catalog chosen by
/// the caller.
pub trait LocalizedError: Error + 'static {
    fn message_source(&self) -> &MessageSource;

    /// The message of this error alone, resolved for `locale`.
    fn message_for(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> String;

    /// The same error as `source()`, when it is itself localized. Chain
    /// walking uses it so that nested messages follow the caller's locale.
    fn localized_source(&self) -> Option<&dyn LocalizedError> {
        None
    }

    /// This error's message followed by each cause's message, joined with
    /// `": "`. Localized causes resolve against the same locale and catalog.
    fn messages_for(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> String {
        let mut parts: Vec<String> = Vec::new();
        let own = self.message_for(locale, catalog);
        if !own.is_empty() {
            parts.push(own);
        }

        let mut next = Link::after(self.localized_source(), self.source());
        while let Some(link) = next {
            let text = link.text(locale, catalog);
            if !text.is_empty() {
                parts.push(text);
            }
            next = link.next();
        }
        parts.join(": ")
    }

    /// Multi-line report: the message, then one `Caused by:` line per cause.
    fn report_for(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> String {
        let mut out = self.message_for(locale, catalog);
        let mut next = Link::after(self.localized_source(), self.source());
        while let Some(link) = next {
            out.push_str("\nCaused by: ");
            out.push_str(&link.text(locale, catalog));
            next = link.next();
        }
        out
    }
}

#[derive(Clone, Copy)]
enum Link<'a> {
    Localized(&'a dyn LocalizedError),
    Plain(&'a (dyn Error + 'static)),
}

impl<'a> Link<'a> {
    fn after(
        localized: Option<&'a dyn LocalizedError>,
        plain: Option<&'a (dyn Error + 'static)>,
    ) -> Option<Link<'a>> {
        localized.map(Link::Localized).or_else(|| plain.map(Link::Plain))
    }

    fn next(self) -> Option<Link<'a>> {
        match self {
            Link::Localized(l) => Link::after(l.localized_source(), l.source()),
            Link::Plain(e) => e.source().map(Link::Plain),
        }
    }

    fn text(self, locale: &Locale, catalog: &dyn MessageCatalog) -> String {
        match self {
            Link::Localized(l) => l.message_for(locale, catalog),
            Link::Plain(e) => e.to_string(),
        }
    }
}

/// Message and optional cause storage with locale-aware resolution.
///
/// Immutable once built. Resolution happens on every call, against whatever
/// locale and catalog the caller passes.
///
/// An error with no message of its own is transparent: its message is the
/// cause's message and `source()` continues from the cause's source, so chained
/// output does not print the same text twice. `cause()` still returns the
/// wrapped error itself.
#[derive(Default)]
pub struct NestedError {
    message: MessageSource,
    cause: Option<BoxError>,
    localizer: Option<Localizer>,
}

impl fmt::Debug for NestedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedError")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

impl NestedError {
    pub fn new(message: MessageSource, cause: Option<BoxError>) -> Self {
        Self {
            message,
            cause,
            localizer: None,
        }
    }

    /// Like `new`, keeping the cause's type so its message can be localized
    /// in chained output.
    pub fn new_localized<E>(message: MessageSource, cause: E) -> Self
    where
        E: LocalizedError + Send + Sync,
    {
        Self::with_localizer(message, Some(Box::new(cause)), downcast_localized::<E>)
    }

    pub(crate) fn with_localizer(
        message: MessageSource,
        cause: Option<BoxError>,
        localizer: Localizer,
    ) -> Self {
        Self {
            message,
            cause,
            localizer: Some(localizer),
        }
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// The cause viewed as a localized error, when its type allows it.
    pub fn localized_cause(&self) -> Option<&dyn LocalizedError> {
        let cause = self.cause.as_deref()?;
        if let Some(l) = self.localizer.and_then(|f| f(cause)) {
            return Some(l);
        }
        downcast_localized::<NestedError>(cause)
    }

    fn is_transparent(&self) -> bool {
        matches!(self.message, MessageSource::Empty) && self.cause.is_some()
    }
}

impl LocalizedError for NestedError {
    fn message_source(&self) -> &MessageSource {
        &self.message
    }

    fn message_for(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> String {
        match &self.message {
            MessageSource::Literal(s) => s.clone(),
            MessageSource::Catalog(m) => m.resolve(locale, catalog),
            MessageSource::Empty => match (self.localized_cause(), self.cause.as_ref()) {
                (Some(l), _) => l.message_for(locale, catalog),
                (None, Some(c)) => c.to_string(),
                (None, None) => String::new(),
            },
        }
    }

    fn localized_source(&self) -> Option<&dyn LocalizedError> {
        let cause = self.localized_cause()?;
        if self.is_transparent() {
            cause.localized_source()
        } else {
            Some(cause)
        }
    }
}

impl fmt::Display for NestedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message_for(&Locale::ROOT, &NoCatalog))
    }
}

impl Error for NestedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause = self.cause.as_deref()?;
        if self.is_transparent() {
            cause.source()
        } else {
            Some(cause as &(dyn Error + 'static))
        }
    }
}
