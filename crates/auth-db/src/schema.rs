//! Schema bootstrap
//!
//! Creates the `users` table on startup when it does not exist yet. Every
//! statement is idempotent, so running it against an existing database is a
//! no-op.

use sqlx::PgPool;
use tracing::{info, instrument};

const STATEMENTS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS users (
        id            BIGSERIAL PRIMARY KEY,
        name          VARCHAR(100) NOT NULL,
        email         VARCHAR(255) NOT NULL,
        password_hash TEXT         NOT NULL,
        age           INTEGER      NOT NULL,
        role          VARCHAR(32)  NOT NULL DEFAULT 'user',
        created_at    TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
        updated_at    TIMESTAMPTZ  NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON users (email)
    ",
];

/// Create the tables the user directory needs
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!("Database schema is up to date");
    Ok(())
}
