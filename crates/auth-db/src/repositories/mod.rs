//! Repository implementations
//!
//! Adapters for the `UserRepository` port defined in auth-core.

mod error;
mod memory;
mod user;

pub use memory::InMemoryUserRepository;
pub use user::PgUserRepository;
