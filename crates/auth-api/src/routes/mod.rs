//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        // Nested "/" only matches the bare prefix
        .route("/users/", get(users::list_users))
}

/// User routes: public auth endpoints plus cookie-protected CRUD
fn user_routes() -> Router<AppState> {
    Router::new()
        // Public
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Session required
        .route("/", get(users::list_users))
        .route("/me", get(users::get_current_user))
        .route("/email", post(users::get_user_by_email))
        .route(
            "/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
