//! Axum extractor for typed JSON request bodies.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::ApiError;

/// JSON body decoded into `T`, regardless of the `Content-Type` header.
///
/// Unlike `axum::Json`, a missing or non-JSON content type is not an error
/// on its own; only the bytes decide. Any failure rejects with
/// [`ApiError::MalformedInput`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::MalformedInput
    })
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            ApiError::MalformedInput
        })?;

        decode(&bytes).map(JsonBody)
    }
}
