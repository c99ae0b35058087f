//! User service
//!
//! Handles reads, partial updates, and deletion of user records.

use auth_core::{DomainError, UserAccount, UserId};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user entity by ID
    async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<UserAccount> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(user_id).into())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(user))
    }

    /// Get user by email
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::user_not_found_by_email(email))?;

        Ok(UserResponse::from(user))
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Apply a partial update
    ///
    /// Only non-empty strings and a non-zero age are applied. A new password
    /// is re-hashed before it is stored.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.get_user_entity(user_id).await?;

        if let Some(name) = request.name.filter(|s| !s.is_empty()) {
            user.set_name(name);
        }

        if let Some(email) = request.email.filter(|s| !s.is_empty()) {
            user.set_email(email);
        }

        if let Some(password) = request.password.filter(|s| !s.is_empty()) {
            let password_hash = self.ctx.password_service().hash(&password)?;
            user.set_password_hash(password_hash);
        }

        if let Some(age) = request.age.filter(|&a| a != 0) {
            user.set_age(age);
        }

        let user = self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user_id, "User profile updated");

        Ok(UserResponse::from(user))
    }

    /// Delete user account
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<()> {
        // Verify user exists so a miss is reported as not found
        self.get_user_entity(user_id).await?;

        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User account deleted");

        Ok(())
    }
}
