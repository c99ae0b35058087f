//! User handlers
//!
//! Endpoints for reading, updating, and deleting user records. All of them
//! require a valid session cookie.

use axum::{extract::State, Json};
use auth_service::{
    ApiResponse, GetUserByEmailRequest, MessageResponse, UpdateUserRequest, UserResponse,
    UserService,
};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List every user
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(ApiResponse::new(users)))
}

/// Get the user behind the session cookie
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user(auth.user_id).await?;
    Ok(Json(ApiResponse::new(user)))
}

/// Get user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user(user_id).await?;
    Ok(Json(ApiResponse::new(user)))
}

/// Get user by email
///
/// POST /users/email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<GetUserByEmailRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.get_user_by_email(&request.email).await?;
    Ok(Json(ApiResponse::new(user)))
}

/// Partially update a user
///
/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    UserIdPath(user_id): UserIdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    tracing::debug!(actor = %auth.user_id, role = %auth.role(), target = %user_id, "Update requested");

    let service = UserService::new(state.service_context());
    let user = service.update_user(user_id, request).await?;
    Ok(Json(ApiResponse::with_message("user updated successfully", user)))
}

/// Delete a user
///
/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<MessageResponse>> {
    tracing::debug!(actor = %auth.user_id, role = %auth.role(), target = %user_id, "Delete requested");

    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(Json(MessageResponse::new("user deleted successfully")))
}
