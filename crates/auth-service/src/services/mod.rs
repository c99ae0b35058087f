//! Business logic services
//!
//! Services borrow the shared [`ServiceContext`] and orchestrate the user
//! directory, credential hasher, and token issuer.

pub mod auth;
pub mod context;
pub mod error;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
