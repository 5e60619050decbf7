//! Route definitions for the `/todos` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted at `/todos`.
///
/// ```text
/// GET    /       -> list_todos (?status=all|pending|completed)
/// POST   /       -> create_todo
/// PUT    /{id}   -> update_todo
/// DELETE /{id}   -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list_todos).post(todo::create_todo))
        .route("/{id}", put(todo::update_todo).delete(todo::delete_todo))
}
