//! Repository for the `todos` table.
//!
//! Every method takes the owning `user_id` and includes it in the `WHERE`
//! clause, so a todo id belonging to another user behaves exactly like a
//! missing one.

use chrono::Utc;
use sqlx::SqlitePool;
use todo_core::todo::STATUS_PENDING;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, user_id, title, description, status, created_at, updated_at";

/// Provides data access for todos, always scoped to one owner.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new pending todo owned by `user_id`.
    ///
    /// `input.title` must already be validated; a `None` title violates the
    /// `NOT NULL` constraint.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateTodo,
    ) -> Result<Todo, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO todos (user_id, title, description, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.description.as_deref().unwrap_or_default())
            .bind(STATUS_PENDING)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// List the user's todos, newest first, optionally restricted to one status.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos
             WHERE user_id = ?1 AND (?2 IS NULL OR status = ?2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(user_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Update one of the user's todos. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the user owns no todo with the given `id`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET
                title = COALESCE(?3, title),
                description = COALESCE(?4, description),
                status = COALESCE(?5, status),
                updated_at = ?6
             WHERE id = ?1 AND user_id = ?2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the user's todos.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1 AND user_id = ?2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
