//! JWT utilities for session tokens
//!
//! Provides HS256 token issuance and validation using the `jsonwebtoken` crate.
//! Tokens are stateless: validity depends only on the signature and `exp`.

use auth_core::UserId;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 86_400;

/// Longest accepted token lifetime (10 years)
pub const MAX_TOKEN_EXPIRY_SECS: i64 = 10 * 365 * 86_400;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email at the time of issue
    pub email: String,
    /// Role at the time of issue
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the subject as a UserId
    ///
    /// # Errors
    /// Returns `AppError::MalformedToken` if the subject is not a valid ID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.sub).map_err(|_| AppError::MalformedToken)
    }
}

/// JWT service for issuing and validating session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_expiry,
        }
    }

    /// Token lifetime in seconds
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a signed session token for a user
    ///
    /// # Errors
    /// Returns `AppError::Signing` if the expiry is out of range or encoding fails
    pub fn issue(&self, subject_id: UserId, email: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.token_expiry)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Signing(anyhow::anyhow!(
                    "Token expiry of {}s is out of range",
                    self.token_expiry
                ))
            })?;

        let claims = Claims {
            sub: subject_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        self.encode_claims(&claims)
    }

    /// Sign an arbitrary set of claims
    fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::Signing(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Validate a session token and return its claims
    ///
    /// # Errors
    /// - `AppError::InvalidToken` if the signature does not match
    /// - `AppError::TokenExpired` if the signature is good but `exp` has passed
    /// - `AppError::MalformedToken` if the token cannot be parsed
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::ImmatureSignature => AppError::InvalidToken,
                _ => AppError::MalformedToken,
            })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
