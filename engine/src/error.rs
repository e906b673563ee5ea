//! Error types for the trivia engine.

use crate::{store::StoreError, CategoryId, QuestionId};
use thiserror::Error;

/// Coarse classification of an [`Error`], stable across variants.
///
/// Transport layers map this onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed pagination or request input.
    InvalidParameter,
    /// A referenced resource does not exist, or a page is empty.
    NotFound,
    /// A mutation was rejected.
    Unprocessable,
    /// The record store failed while serving a read.
    Internal,
}

/// All possible errors from the trivia engine.
#[derive(Debug, Error)]
pub enum Error {
    // Parameter errors
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // Lookup errors
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("no categories found")]
    NoCategories,

    #[error("no questions found on page {0}")]
    EmptyPage(u64),

    // Mutation errors
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("mutation failed: {0}")]
    MutationFailed(#[source] StoreError),

    // Store errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Error::CategoryNotFound(_) | Error::NoCategories | Error::EmptyPage(_) => {
                ErrorKind::NotFound
            }
            // Deleting a missing question is a client data error, not a lookup miss.
            Error::MissingField(_) | Error::QuestionNotFound(_) | Error::MutationFailed(_) => {
                ErrorKind::Unprocessable
            }
            Error::Store(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
