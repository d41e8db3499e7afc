//! User CRUD handlers.
//!
//! Pure marshaling between HTTP and the [`UserRepository`] held in
//! [`AppState`]; no business rules live here.
//!
//! [`UserRepository`]: userbase_core::storage::UserRepository

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use userbase_core::user::{CreateUserRequest, UpdateUserRequest, UserDirectory};

use super::{body::JsonBody, ApiError};
use crate::state::AppState;

/// List all users (GET /users).
///
/// Returns `{"users": {"<id>": {...}}}`.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserDirectory>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users.into_iter().collect()))
}

/// Get a single user by ID (GET /users/{id}).
///
/// A missing user answers 200 with `{}` unless `strict_not_found` is set,
/// in which case it answers 404.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    match state.users.get_user(id).await? {
        Some(user) => Ok(Json(user).into_response()),
        None if state.strict_not_found => Err(ApiError::UserNotFound),
        None => {
            tracing::debug!(user_id = id, "User not found, answering empty object");
            Ok(Json(serde_json::json!({})).into_response())
        }
    }
}

/// Create a new user (POST /users).
///
/// Answers 201 with a `Location` header and no body.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<Response, ApiError> {
    let id = state
        .users
        .create_user(&payload.name, &payload.email)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(user_id = id, "Created new user");

    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/users/{id}"))]).into_response())
}

/// Replace a user's name and email (PUT /users/{id}).
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<(StatusCode, &'static str), ApiError> {
    if !state
        .users
        .update_user(id, &payload.name, &payload.email)
        .await?
    {
        return Err(ApiError::UserNotFound);
    }

    tracing::info!(user_id = id, "Updated user");

    Ok((StatusCode::OK, "User updated"))
}

/// Delete a user by ID (DELETE /users/{id}).
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, &'static str), ApiError> {
    if !state.users.delete_user(id).await? {
        return Err(ApiError::UserNotFound);
    }

    tracing::info!(user_id = id, "Deleted user");

    Ok((StatusCode::OK, "User deleted"))
}
