//! # auth-api
//!
//! REST API server built with Axum framework.
//!
//! Exposes registration, login, logout, and user CRUD under
//! `/api/v1/users`, with the session token carried in an HTTP-only cookie.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with_repository, run, run_server};
pub use state::AppState;
