//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use todo_core::types::DbId;

use crate::auth::cookie::read_session_token;
use crate::auth::jwt::TokenService;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `token` session cookie.
///
/// Use this as the first extractor of any handler that touches user data, so
/// the request is rejected before the body is parsed or the database is hit:
///
/// ```ignore
/// async fn my_handler(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

/// Resolve the subject of a request from its session cookie.
///
/// A missing cookie and an invalid token both yield `None`.
pub fn resolve_subject(headers: &HeaderMap, tokens: &TokenService) -> Option<AuthUser> {
    let token = read_session_token(headers)?;
    tokens
        .verify(token)
        .ok()
        .map(|user_id| AuthUser { user_id })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_subject(&parts.headers, &state.tokens).ok_or_else(AppError::unauthorized)
    }
}
