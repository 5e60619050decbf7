//! The `token` session cookie.
//!
//! The session token is only ever read from this cookie: never from headers
//! such as `Authorization`, never from the query string.

use axum::http::header::{InvalidHeaderValue, COOKIE};
use axum::http::{HeaderMap, HeaderValue};

use super::jwt::SESSION_TTL_SECS;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Find the session token among the request's `Cookie` headers.
///
/// Returns `None` when the cookie is absent or has an empty value.
pub fn read_session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value that stores `token` for the session lifetime.
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={token}; {}",
        attributes(secure)
    ))
}

/// `Set-Cookie` value that makes the client drop the session cookie.
pub fn clear_session_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure")
    } else {
        HeaderValue::from_static("token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

fn attributes(secure: bool) -> String {
    let mut attrs = format!("Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}");
    if secure {
        attrs.push_str("; Secure");
    }
    attrs
}
