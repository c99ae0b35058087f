//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use auth_core::UserAccount;

use super::responses::UserResponse;

impl From<&UserAccount> for UserResponse {
    fn from(user: &UserAccount) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            role: user.role.clone(),
        }
    }
}

impl From<UserAccount> for UserResponse {
    fn from(user: UserAccount) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            role: user.role,
        }
    }
}
