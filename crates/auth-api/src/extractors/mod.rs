//! Axum extractors for request handling
//!
//! Custom extractors for cookie authentication, validation, and path IDs.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, SESSION_COOKIE};
pub use path::UserIdPath;
pub use validated::ValidatedJson;
