use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use userbase_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors a user handler can answer with.
///
/// Bodies are plain text. Storage failures go through
/// [`repository_error_to_status_code`], except for inserts, which always
/// answer 500 `Error adding user`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON format")]
    MalformedInput,
    #[error("User not found")]
    UserNotFound,
    #[error("Error adding user")]
    CreateFailed(#[source] RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::CreateFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Repository(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            ApiError::Repository(RepositoryError::NotFound { .. }) => {
                ApiError::UserNotFound.to_string()
            }
            ApiError::CreateFailed(err) => {
                tracing::error!(error = %err, "Failed to create user");
                self.to_string()
            }
            ApiError::Repository(err) if status.is_server_error() => {
                tracing::error!(error = %err, status = %status, "Storage error");
                self.to_string()
            }
            _ => {
                tracing::warn!(status = %status, message = %self, "API error");
                self.to_string()
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_input_is_400() {
        let response = ApiError::MalformedInput.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid JSON format");
    }

    #[tokio::test]
    async fn test_repository_not_found_reads_user_not_found() {
        let err = ApiError::from(RepositoryError::NotFound {
            entity_type: "User",
            id: "9".to_string(),
        });
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "User not found");
    }

    #[tokio::test]
    async fn test_create_failed_is_always_500() {
        let err = ApiError::CreateFailed(RepositoryError::ConstraintViolation(
            "UNIQUE constraint failed: users.email".to_string(),
        ));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Error adding user");
    }

    #[test]
    fn test_repository_errors_use_status_mapping() {
        let conflict = ApiError::from(RepositoryError::ConstraintViolation("dup".to_string()));
        let unavailable = ApiError::from(RepositoryError::StorageUnavailable("closed".to_string()));
        let failed = ApiError::from(RepositoryError::QueryFailed("boom".to_string()));

        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
