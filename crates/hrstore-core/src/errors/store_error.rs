//! Top-level error for every record store operation.

use super::error_code::{self, StoreErrorCode};
use super::ValidationError;

/// Errors returned by the record store.
///
/// "No rows matched" is never an error: searches return an empty `Vec`
/// and the bulk update returns `Ok(0)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backend unreachable: {message}")]
    Connection { message: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("employee not found: {id}")]
    NotFound { id: i64 },

    #[error("query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Build a `Query` error from anything displayable (typically `rusqlite::Error`).
    pub fn query(e: impl std::fmt::Display) -> Self {
        Self::Query {
            message: e.to_string(),
        }
    }

    /// Build a `Connection` error from anything displayable.
    pub fn connection(e: impl std::fmt::Display) -> Self {
        Self::Connection {
            message: e.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl StoreErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Connection { .. } => error_code::CONNECTION_ERROR,
            Self::Validation(_) => error_code::VALIDATION_ERROR,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Query { .. } => error_code::QUERY_ERROR,
        }
    }
}

/// Convenience type alias.
pub type StoreResult<T> = Result<T, StoreError>;
