//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl RegisterRequest {
    /// The canonical example account
    pub fn alice() -> Self {
        Self {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            age: 30,
            role: None,
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            age: 25,
            role: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Success envelope: `{message?, data}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: Option<String>,
    pub data: T,
}

/// Message-only body
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Public profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub role: String,
}

/// Login payload
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub user: UserProfile,
    pub token: String,
}

/// Error envelope: `{error:{code, message, details?}}`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
