//! Handlers for the `/auth` resource (login, register, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use todo_core::credentials::{
    normalize_email, validate_email, validate_password_strength, MIN_PASSWORD_LENGTH,
};
use todo_core::error::CoreError;
use todo_db::models::user::{CreateUser, UserResponse};
use todo_db::repositories::UserRepo;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::password::{hash_password, verify_password, DUMMY_PASSWORD_HASH};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login` and `POST /auth/register`.
///
/// Fields are optional so a missing one yields our 400 rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Normalized email and raw password, or 400 if either is missing/blank.
    fn require(&self) -> AppResult<(String, &str)> {
        match (self.email.as_deref(), self.password.as_deref()) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Ok((normalize_email(email), password))
            }
            _ => Err(AppError::BadRequest("Email and password required".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Check email + password and set the session cookie. Unknown emails and
/// wrong passwords get the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let (email, password) = input.require()?;

    let user = UserRepo::find_by_email(&state.pool, &email).await?;

    // Unknown emails still pay for one Argon2 verification.
    let stored_hash = user
        .as_ref()
        .map_or(DUMMY_PASSWORD_HASH, |user| user.password_hash.as_str());
    let password_valid = verify_password(password, stored_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    let user = match user {
        Some(user) if password_valid => user,
        _ => return Err(invalid_credentials()),
    };

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = session_cookie(&token, state.config.secure_cookies)
        .map_err(|e| AppError::InternalError(format!("Session cookie error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/auth/register
///
/// Create an account. Does not log the user in; the client calls login next.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let (email, password) = input.require()?;
    validate_email(&email)?;
    validate_password_strength(password, MIN_PASSWORD_LENGTH)?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clear the session cookie. Returns 204 No Content. The token itself stays
/// valid until it expires; there is no server-side session to revoke.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie(state.config.secure_cookies))],
    )
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}
