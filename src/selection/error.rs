//! Business errors raised by the selection layer.
//!
//! These never carry an HTTP status. Each variant reports an [`ErrorKind`]
//! and the API boundary decides how to present it.

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of a selection error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied missing or malformed input.
    BadRequest,
    /// The requested data does not exist or the filtered set is empty.
    NotFound,
}

/// Selection and validation errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Page {page} is out of range")]
    #[diagnostic(code(trivia::selection::page_out_of_range))]
    PageOutOfRange { page: i64 },

    #[error("Search term must not be empty")]
    #[diagnostic(code(trivia::selection::empty_search_term))]
    EmptySearchTerm,

    #[error("No questions match '{term}'")]
    #[diagnostic(code(trivia::selection::no_matches))]
    NoMatches { term: String },

    #[error("Category {id} does not exist")]
    #[diagnostic(code(trivia::selection::unknown_category))]
    UnknownCategory { id: i64 },

    #[error("No unseen questions remain")]
    #[diagnostic(code(trivia::selection::exhausted))]
    Exhausted,

    #[error("Missing required field: {field}")]
    #[diagnostic(code(trivia::selection::missing_field))]
    MissingField { field: &'static str },

    #[error("Invalid value for {field}: {message}")]
    #[diagnostic(code(trivia::selection::invalid_field))]
    InvalidField { field: &'static str, message: String },
}

impl SelectionError {
    /// Classify this error for the boundary layer.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySearchTerm | Self::MissingField { .. } | Self::InvalidField { .. } => {
                ErrorKind::BadRequest
            }
            Self::PageOutOfRange { .. }
            | Self::NoMatches { .. }
            | Self::UnknownCategory { .. }
            | Self::Exhausted => ErrorKind::NotFound,
        }
    }
}

/// Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;
