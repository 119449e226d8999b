pub mod catalog_error;
pub mod config_error;
pub mod format_error;
pub mod nested_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use format_error::FormatError;
pub use nested_error::{BoxError, CatalogMessage, LocalizedError, MessageSource, NestedError};
