#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::auth::jwt::JwtConfig;
use todo_api::auth::password::hash_password;
use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_db::models::user::{CreateUser, User};
use todo_db::repositories::UserRepo;
use todo_db::DbPool;

/// Signing secret shared by the test app and tests that mint tokens directly.
pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Password given to every user created with [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        secure_cookies: false,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// A fresh, migrated in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = todo_db::create_memory_pool()
        .await
        .expect("in-memory pool should open");
    todo_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Application state over `pool` with [`test_config`].
pub fn test_state(pool: DbPool) -> AppState {
    AppState::new(pool, test_config())
}

/// Build the full application router (same middleware stack and request gate
/// as production) over `pool`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(test_state(pool))
}

/// Insert a user with [`TEST_PASSWORD`] directly through the repository.
pub async fn create_user(pool: &DbPool, email: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    json: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let body = match json {
        Some(value) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(json)).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie), Some(json)).await
}

pub async fn put_json_with_cookie(
    app: Router,
    uri: &str,
    cookie: &str,
    json: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(cookie), Some(json)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(cookie), None).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// The raw `Set-Cookie` header of a response.
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// The `name=value` pair of the `Set-Cookie` header, ready to send back as a
/// `Cookie` header.
pub fn cookie_pair(response: &Response<Body>) -> String {
    let header = set_cookie(response).expect("response must set a cookie");
    header
        .split(';')
        .next()
        .expect("Set-Cookie has a name=value pair")
        .to_string()
}

/// Log in through the API and return the session `Cookie` header value.
pub async fn login(app: Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    cookie_pair(&response)
}
