//! In-memory implementation of UserRepository
//!
//! Backs the service in tests and local runs without PostgreSQL. Email
//! uniqueness is checked and applied under a single write lock, so concurrent
//! registrations for the same address cannot both succeed.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::instrument;

use auth_core::{DomainError, NewUserAccount, RepoResult, UserAccount, UserId, UserRepository};

/// In-memory user directory keyed by ID
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, UserAccount>>,
    next_id: AtomicI64,
    offline: AtomicBool,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty directory; IDs start at 1
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            offline: AtomicBool::new(false),
        }
    }

    /// Simulate a storage outage: while offline every call fails with
    /// `DomainError::DatabaseError`
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn check_online(&self) -> RepoResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "in-memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserAccount>> {
        self.check_online()?;

        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserAccount>> {
        self.check_online()?;

        Ok(self.users.read().get(&id).cloned())
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: &NewUserAccount) -> RepoResult<UserAccount> {
        self.check_online()?;

        let mut users = self.users.write();
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let account = user.clone().into_account(id, Utc::now());
        users.insert(id, account.clone());

        Ok(account)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &UserAccount) -> RepoResult<UserAccount> {
        self.check_online()?;

        let mut users = self.users.write();
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }

        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| DomainError::user_not_found(user.id))?;

        let created_at = stored.created_at;
        *stored = UserAccount {
            created_at,
            updated_at: Utc::now(),
            ..user.clone()
        };

        Ok(stored.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        self.check_online()?;

        self.users
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<UserAccount>> {
        self.check_online()?;

        Ok(self.users.read().values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        self.check_online()
    }
}
