//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    /// Owner. Every repository query filters on this column.
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    /// One of `todo_core::todo::STATUS_*`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a todo. The owner comes from the session, never the body.
///
/// `title` is optional here so a missing one is reported by title validation
/// rather than as a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// DTO for updating a todo. Only non-`None` fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
