pub mod catalog;
pub mod config;
pub mod errors;
pub mod format;
pub mod locale;

pub use catalog::{DirCatalog, MemoryCatalog, MessageCatalog, NoCatalog};
pub use errors::{
    BoxError, CatalogError, CatalogMessage, ConfigError, FormatError, LocalizedError,
    MessageSource, NestedError,
};
pub use locale::Locale;
