//! Static HTML pages. Access to them is decided by the request gate; the
//! pages themselves talk to the JSON API.

use axum::response::Html;
use axum::Extension;

use crate::middleware::auth::AuthUser;

pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/home.html"))
}

pub async fn login() -> Html<&'static str> {
    Html(include_str!("../../assets/login.html"))
}

pub async fn register() -> Html<&'static str> {
    Html(include_str!("../../assets/register.html"))
}

/// The todo list page. Only reachable through the gate, which attaches the
/// resolved subject.
pub async fn todos(Extension(user): Extension<AuthUser>) -> Html<&'static str> {
    tracing::debug!(user_id = user.user_id, "Serving todo list page");
    Html(include_str!("../../assets/todos.html"))
}
