//! Authentication service
//!
//! Handles user registration, login, and logout.

use auth_common::AppError;
use auth_core::{DomainError, NewUserAccount};
use tracing::{debug, info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        // Check if email already exists
        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            warn!("Registration rejected: email already registered");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        // Hash password
        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let new_user = NewUserAccount::new(
            request.name,
            request.email,
            password_hash,
            request.age,
            request.role.as_deref(),
        );

        // Save; a concurrent registration for the same email surfaces here
        let user = self.ctx.user_repo().insert(&new_user).await?;

        info!(user_id = %user.id, role = %user.role, "User registered successfully");

        Ok(UserResponse::from(user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        // Find user by email; an unknown account still pays for one verification
        let Some(user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            self.ctx.password_service().verify_dummy(&request.password);
            warn!("Login failed: user not found");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        };

        // Verify password
        if !self
            .ctx
            .password_service()
            .verify(&request.password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Issue session token
        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.email, &user.role)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            user: UserResponse::from(user),
            token,
        })
    }

    /// Logout
    ///
    /// Sessions are stateless, so there is nothing to revoke. The presented
    /// token is only inspected so the logout can be attributed in logs.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: Option<&str>) -> ServiceResult<()> {
        match token.map(|t| self.ctx.jwt_service().validate(t)) {
            Some(Ok(claims)) => info!(user_id = %claims.sub, "User logged out"),
            Some(Err(e)) => debug!(error = %e, "Logout with unusable token"),
            None => debug!("Logout without session cookie"),
        }

        Ok(())
    }
}
