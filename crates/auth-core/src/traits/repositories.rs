//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the user directory, and the
//! infrastructure layer provides one adapter per storage backend.

use async_trait::async_trait;

use crate::entities::{NewUserAccount, UserAccount};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// User directory
///
/// Implementations must enforce email uniqueness atomically: `insert` and
/// `update` return [`DomainError::EmailAlreadyExists`] when another account
/// already owns the email, even under concurrent writers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserAccount>>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserAccount>>;

    /// Insert a new user, returning the stored account with its assigned ID
    async fn insert(&self, user: &NewUserAccount) -> RepoResult<UserAccount>;

    /// Persist changes to an existing user
    ///
    /// Returns [`DomainError::UserNotFound`] if the account no longer exists.
    async fn update(&self, user: &UserAccount) -> RepoResult<UserAccount>;

    /// Delete a user
    ///
    /// Returns [`DomainError::UserNotFound`] if nothing was deleted.
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// List all users ordered by ID
    async fn list_all(&self) -> RepoResult<Vec<UserAccount>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
