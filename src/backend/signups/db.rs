/**
 * Database Operations for Waitlist Signups
 *
 * Handlers talk to persistence through `SignupStore` so the HTTP layer can
 * be exercised without PostgreSQL. `PgSignupStore` is the production
 * implementation on top of `sqlx::PgPool`.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::shared::{NewSignup, Signup};

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already on the waitlist
    #[error("Duplicate email: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for waitlist signups
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Insert a signup and return the stored row
    async fn insert(&self, signup: &NewSignup) -> Result<Signup, StoreError>;

    /// All signups, oldest first
    async fn list(&self) -> Result<Vec<Signup>, StoreError>;

    /// Every stored email address
    async fn emails(&self) -> Result<Vec<String>, StoreError>;

    /// Delete by email. Returns `false` when nothing matched.
    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError>;
}

/// PostgreSQL-backed signup store
#[derive(Clone, Debug)]
pub struct PgSignupStore {
    pool: PgPool,
}

impl PgSignupStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignupStore for PgSignupStore {
    async fn insert(&self, signup: &NewSignup) -> Result<Signup, StoreError> {
        let row = sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO emails (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email, created_at
            "#
        )
        .bind(&signup.first_name)
        .bind(&signup.last_name)
        .bind(&signup.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::Duplicate(signup.email.clone())
            }
            other => StoreError::Database(other),
        })?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Signup>, StoreError> {
        let rows = sqlx::query_as::<_, Signup>(
            r#"
            SELECT id, first_name, last_name, email, created_at
            FROM emails
            ORDER BY created_at ASC, id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn emails(&self) -> Result<Vec<String>, StoreError> {
        let emails = sqlx::query_scalar::<_, String>("SELECT email FROM emails ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(emails)
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM emails WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
