// core/src/errors/format_error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unclosed placeholder starting at offset {offset}")]
    UnclosedPlaceholder { offset: usize },

    #[error("invalid argument index at offset {offset}: {text:?}")]
    InvalidArgumentIndex { offset: usize, text: String },
}
