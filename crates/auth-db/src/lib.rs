//! # auth-db
//!
//! Storage layer implementing the user directory port from `auth-core`.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap for PostgreSQL
//! - Database models with SQLx `FromRow` derives
//! - Model -> entity mappers
//! - `PgUserRepository` backed by PostgreSQL
//! - `InMemoryUserRepository` for tests and local development
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auth_db::{create_pool, ensure_schema, DatabaseConfig, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let app_config = auth_common::AppConfig::from_env()?;
//!     let pool = create_pool(&DatabaseConfig::from(&app_config.database)).await?;
//!     ensure_schema(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{InMemoryUserRepository, PgUserRepository};
pub use schema::ensure_schema;
