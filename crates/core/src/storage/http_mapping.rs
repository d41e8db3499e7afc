//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConstraintViolation` -> 409 (Conflict)
/// - `StorageUnavailable` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use userbase_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "User",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConstraintViolation(_) => 409,
        RepositoryError::StorageUnavailable(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            entity_type: "User",
            id: "3".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_constraint_violation_maps_to_409() {
        let error = RepositoryError::ConstraintViolation("duplicate email".to_string());
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_storage_unavailable_maps_to_503() {
        let error = RepositoryError::StorageUnavailable("connection closed".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("near \"SELEC\": syntax error".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
