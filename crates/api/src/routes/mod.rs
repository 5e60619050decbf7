pub mod auth;
pub mod health;
pub mod pages;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/register                                   register (public)
/// /auth/logout                                     logout (public, clears cookie)
///
/// /todos                                           list, create (session required)
/// /todos/{id}                                      update, delete (session required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/todos", todo::router())
}
