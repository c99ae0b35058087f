//! Domain entities - core business objects

mod user;

pub use user::{normalize_role, NewUserAccount, UserAccount, DEFAULT_ROLE};
