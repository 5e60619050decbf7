//! Handlers for the `/todos` resource.
//!
//! Every handler takes [`AuthUser`] as its first extractor and passes
//! `user.user_id` to the repository, which scopes every query by owner. A todo
//! owned by someone else is reported exactly like a missing one (404).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use todo_core::error::CoreError;
use todo_core::todo::{validate_title, StatusFilter, TodoStatus};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Query parameters for `GET /todos`.
#[derive(Debug, Deserialize)]
pub struct ListTodosParams {
    /// `all` (default), `pending`, or `completed`.
    pub status: Option<String>,
}

/// GET /api/todos?status=
///
/// List the caller's todos, newest first.
pub async fn list_todos(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> AppResult<impl IntoResponse> {
    let StatusFilter(status) = StatusFilter::parse(params.status.as_deref())?;

    let todos =
        TodoRepo::list_for_user(&state.pool, user.user_id, status.map(TodoStatus::as_str)).await?;

    Ok(Json(DataResponse { data: todos }))
}

/// POST /api/todos
///
/// Create a pending todo owned by the caller.
pub async fn create_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    validate_title(input.title.as_deref().unwrap_or_default())?;

    let todo = TodoRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(user_id = user.user_id, todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// PUT /api/todos/{id}
///
/// Partially update one of the caller's todos.
pub async fn update_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(status) = input.status.take() {
        let status: TodoStatus = status.parse()?;
        input.status = Some(status.as_str().to_string());
    }

    let todo = TodoRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Todo", id })?;

    tracing::info!(user_id = user.user_id, todo_id = todo.id, status = %todo.status, "Todo updated");

    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/todos/{id}
///
/// Delete one of the caller's todos.
pub async fn delete_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete(&state.pool, id, user.user_id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Todo", id }.into());
    }

    tracing::info!(user_id = user.user_id, todo_id = id, "Todo deleted");

    Ok(Json(DataResponse {
        data: MessageResponse {
            message: "Todo deleted successfully",
        },
    }))
}
