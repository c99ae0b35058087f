//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    #[validate(range(min = 5, max = 120, message = "Age must be between 5 and 120"))]
    pub age: i32,

    /// Defaults to "user" when absent or empty
    #[validate(length(max = 32, message = "Role must be at most 32 characters"))]
    pub role: Option<String>,
}

/// User login request
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial user update
///
/// Absent or empty strings and a zero age leave the stored value unchanged.
#[derive(Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: Option<String>,

    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120"))]
    pub age: Option<i32>,
}

/// Lookup by email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GetUserByEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Treat `""` the same as an absent field
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// Password fields never reach logs
impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("age", &self.age)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("age", &self.age)
            .finish()
    }
}
