//! Application error types
//!
//! Unified error handling for the entire application.

use auth_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Missing authentication")]
    MissingAuth,

    // Credential hashing and token signing errors
    #[error("Password hashing failed")]
    Hashing(#[source] anyhow::Error),

    #[error("Password verification failed")]
    Verification(#[source] anyhow::Error),

    #[error("Token signing failed")]
    Signing(#[source] anyhow::Error),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::MalformedToken
            | Self::MissingAuth => 401,

            // 500 Internal Server Error
            Self::Hashing(_)
            | Self::Verification(_)
            | Self::Signing(_)
            | Self::Database(_)
            | Self::Config(_) => 500,

            Self::Domain(e) => domain_status_code(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Hashing(_) => "HASHING_ERROR",
            Self::Verification(_) => "VERIFICATION_ERROR",
            Self::Signing(_) => "SIGNING_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Message safe to return to clients
    ///
    /// Server errors collapse to a generic message; the detail stays in logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Domain(DomainError::DatabaseError(_)) => {
                "Database error".to_string()
            }
            e if e.is_server_error() => "Internal server error".to_string(),
            e => e.to_string(),
        }
    }
}

/// Map a domain error onto an HTTP status code
///
/// Shared by every layer that turns a [`DomainError`] into a response.
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_validation() || err.is_conflict() {
        400
    } else {
        500
    }
}
