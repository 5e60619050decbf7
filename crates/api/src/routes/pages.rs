//! Browser pages. Mounted at the root so the request gate sees the paths it
//! classifies (`/todos`, `/login`, `/register`).

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        .route("/todos", get(pages::todos))
}
