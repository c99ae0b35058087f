//! User model -> entity mapper

use auth_core::{UserAccount, UserId};

use crate::models::UserModel;

/// Convert UserModel to UserAccount entity
impl From<UserModel> for UserAccount {
    fn from(model: UserModel) -> Self {
        UserAccount {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            age: model.age,
            role: model.role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
