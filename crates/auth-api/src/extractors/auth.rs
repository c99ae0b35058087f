//! Authentication extractor
//!
//! Extracts and validates the session token carried in the `auth_token`
//! cookie.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use auth_common::{AppError, Claims};
use auth_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the cookie holding the session token
pub const SESSION_COOKIE: &str = "auth_token";

/// Authenticated user extracted from the session cookie
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: UserId,
    /// Full set of verified claims
    pub claims: Claims,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId, claims: Claims) -> Self {
        Self { user_id, claims }
    }

    /// Role recorded in the token
    pub fn role(&self) -> &str {
        &self.claims.role
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::App(AppError::MissingAuth))?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        let claims = app_state.jwt_service().validate(&token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected session token");
            ApiError::App(e)
        })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::App(e)
        })?;

        Ok(AuthUser::new(user_id, claims))
    }
}
