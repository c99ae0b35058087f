//! Authentication handlers
//!
//! Endpoints for user registration, login, and logout.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use auth_common::CookieConfig;
use auth_service::{
    ApiResponse, AuthService, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    UserResponse,
};

use crate::extractors::{ValidatedJson, SESSION_COOKIE};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /users/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<ApiResponse<UserResponse>>>> {
    let service = AuthService::new(state.service_context());
    let profile = service.register(request).await?;
    Ok(Created(Json(ApiResponse::with_message(
        "user registered successfully",
        profile,
    ))))
}

/// Login with email and password
///
/// POST /users/login
///
/// The token is returned in the body and set as an HTTP-only session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<LoginResponse>>)> {
    let service = AuthService::new(state.service_context());
    let session = service.login(request).await?;

    let cookie = session_cookie(session.token.clone(), state.cookie_config());
    Ok((
        jar.add(cookie),
        Json(ApiResponse::with_message("login successful", session)),
    ))
}

/// Logout
///
/// POST /users/logout
///
/// Always succeeds and clears the session cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let service = AuthService::new(state.service_context());
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned());
    service.logout(token.as_deref()).await?;

    let jar = jar.add(removal_cookie(state.cookie_config()));
    Ok((jar, Json(MessageResponse::new("logout successful"))))
}

/// Session cookie carrying a freshly issued token
///
/// No `Max-Age`: the token's own expiry bounds the session.
fn session_cookie(token: String, config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .path("/");

    if let Some(domain) = &config.domain {
        cookie = cookie.domain(domain.clone());
    }

    cookie.build()
}

/// Expired, empty session cookie
///
/// Sent even when the request carried no cookie, so clients always drop it.
fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), config);
    cookie.make_removal();
    cookie
}
