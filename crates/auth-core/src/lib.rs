//! # auth-core
//!
//! Domain layer containing the user account entity, identifiers, domain errors,
//! and the user directory port. This crate has zero dependencies on
//! infrastructure (database, web framework, crypto).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{normalize_role, NewUserAccount, UserAccount, DEFAULT_ROLE};
pub use error::DomainError;
pub use traits::{RepoResult, UserRepository};
pub use value_objects::{UserId, UserIdParseError};
