//! Path parameter extractors
//!
//! Type-safe extraction of user IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use auth_core::UserId;

use crate::response::ApiError;

/// `:id` path segment parsed as a [`UserId`]
///
/// Non-numeric values and IDs below 1 are rejected with 400.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let user_id = UserId::parse(&raw).map_err(|e| {
            tracing::debug!(error = %e, id = %raw, "Rejected user id");
            ApiError::invalid_path("Invalid user ID")
        })?;

        Ok(UserIdPath(user_id))
    }
}
