//! Credential hashing and session tokens

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, DEFAULT_TOKEN_EXPIRY_SECS, MAX_TOKEN_EXPIRY_SECS};
pub use password::{hash_password, verify_password, PasswordService};
