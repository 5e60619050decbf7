//! Request gate: decides, before any handler runs, whether a request may
//! proceed or must be redirected.
//!
//! | Class       | Valid session              | No / invalid session   |
//! |-------------|----------------------------|------------------------|
//! | `Protected` | continue, subject attached | 302 to `/login`        |
//! | `AuthOnly`  | 302 to `/todos`            | continue               |
//! | `Public`    | continue                   | continue               |
//!
//! The token is re-verified on every request; nothing is cached.

use axum::extract::{Request, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use todo_core::routing::{RouteClass, HOME_PATH, LOGIN_PATH};

use super::auth::resolve_subject;
use crate::state::AppState;

/// Axum middleware implementing the route-class decision table above.
///
/// For protected routes the resolved [`AuthUser`](super::auth::AuthUser) is
/// inserted into the request extensions, so page handlers receive it as an
/// `Extension<AuthUser>` parameter rather than re-deriving it.
pub async fn request_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match RouteClass::of(request.uri().path()) {
        RouteClass::Public => next.run(request).await,
        RouteClass::Protected => match resolve_subject(request.headers(), &state.tokens) {
            Some(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            None => {
                tracing::debug!(path = %request.uri().path(), "No valid session, redirecting to login");
                found(LOGIN_PATH)
            }
        },
        RouteClass::AuthOnly => match resolve_subject(request.headers(), &state.tokens) {
            Some(user) => {
                tracing::debug!(user_id = user.user_id, "Already signed in, redirecting home");
                found(HOME_PATH)
            }
            None => next.run(request).await,
        },
    }
}

/// `302 Found` redirect to `location`.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
