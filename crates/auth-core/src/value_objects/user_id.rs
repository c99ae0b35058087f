//! User ID - positive 64-bit identifier assigned by the user directory
//!
//! PostgreSQL hands these out from a `BIGSERIAL` sequence, so valid IDs
//! start at 1. Zero and negative values are rejected at parse time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a stored user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the ID lies in the range the directory hands out
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|_| UserIdParseError::InvalidFormat)?;

        if id < 1 {
            return Err(UserIdParseError::OutOfRange);
        }

        Ok(Self(id))
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,

    #[error("user id must be a positive integer")]
    OutOfRange,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        if id < 1 {
            return Err(serde::de::Error::custom(UserIdParseError::OutOfRange));
        }
        Ok(Self(id))
    }
}
