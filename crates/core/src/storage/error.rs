use thiserror::Error;

use crate::user::UserError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<UserError> for RepositoryError {
    fn from(err: UserError) -> Self {
        RepositoryError::ConstraintViolation(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
