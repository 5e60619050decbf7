//! Repository for the `users` table.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, created_at, updated_at";

/// Provides data access for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation if the email is already registered.
    pub async fn create(pool: &SqlitePool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO users (email, password_hash, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a user by (normalized) email.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = ?1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
