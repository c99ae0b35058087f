//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended). Hashes are
//! stored as PHC strings, so the salt and parameters travel with the hash.

use std::sync::LazyLock;

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::error::AppError;

/// Hash checked when the account does not exist, so that path costs as much
/// as a wrong password
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dummy-password-for-unknown-accounts").ok());

/// Hash a password using Argon2id
///
/// # Errors
/// Returns `AppError::Hashing` if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Hashing(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// A mismatch is `Ok(false)`, not an error.
///
/// # Errors
/// Returns `AppError::Verification` if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| {
        AppError::Verification(anyhow::anyhow!("Invalid password hash format: {e}"))
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::Verification(anyhow::anyhow!(
            "Password verification failed: {e}"
        ))),
    }
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a hash
    ///
    /// # Errors
    /// Returns an error if the hash cannot be parsed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }

    /// Run a full verification against a throwaway hash
    ///
    /// Used when no account matches, so the caller spends the same Argon2
    /// work as for a wrong password. The outcome is discarded.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(hash) = DUMMY_HASH.as_deref() {
            let _ = verify_password(password, hash);
        }
    }
}
