//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use auth_core::{DomainError, NewUserAccount, RepoResult, UserAccount, UserId, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserAccount>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, password_hash, age, role, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserAccount::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserAccount>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, password_hash, age, role, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(UserAccount::from))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: &NewUserAccount) -> RepoResult<UserAccount> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (name, email, password_hash, age, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, age, role, created_at, updated_at
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.age)
        .bind(&user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(model.into())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &UserAccount) -> RepoResult<UserAccount> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET name = $2, email = $3, password_hash = $4, age = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, age, role, created_at, updated_at
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.age)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        model
            .map(UserAccount::from)
            .ok_or_else(|| DomainError::user_not_found(user.id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<UserAccount>> {
        let rows = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, password_hash, age, role, created_at, updated_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserAccount::from).collect())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
