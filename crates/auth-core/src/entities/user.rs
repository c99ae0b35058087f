//! User account entity - a registered identity with stored credentials

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::UserId;

/// Role assigned when registration does not name one
pub const DEFAULT_ROLE: &str = "user";

/// Resolve the role to store for a new account
///
/// Absent or blank roles fall back to [`DEFAULT_ROLE`].
pub fn normalize_role(role: Option<&str>) -> String {
    match role.map(str::trim) {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => DEFAULT_ROLE.to_string(),
    }
}

/// Stored user account
///
/// Not `Serialize`: it carries the password hash. Outward-facing code maps
/// it to a profile DTO first.
#[derive(Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Replace the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Replace the login email
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.touch();
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    /// Replace the age
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("age", &self.age)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Account data handed to the directory for insertion
///
/// The directory assigns the ID and timestamps.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUserAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub role: String,
}

impl NewUserAccount {
    /// Create insert data, falling back to the default role when none is given
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        age: i32,
        role: Option<&str>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            age,
            role: normalize_role(role),
        }
    }

    /// Materialize a stored account with the given ID and creation time
    pub fn into_account(self, id: UserId, now: DateTime<Utc>) -> UserAccount {
        UserAccount {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            age: self.age,
            role: self.role,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Debug for NewUserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUserAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("age", &self.age)
            .field("role", &self.role)
            .finish()
    }
}
