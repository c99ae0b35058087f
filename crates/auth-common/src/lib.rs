//! # auth-common
//!
//! Shared utilities including configuration, error handling, credential
//! hashing, session tokens, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, Claims, JwtService, PasswordService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, LogFormat, ServerConfig,
};
pub use error::{domain_status_code, AppError};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError,
};
