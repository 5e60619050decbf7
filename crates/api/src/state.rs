use std::sync::Arc;

use crate::auth::jwt::TokenService;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todo_db::DbPool,
    /// Server configuration, read once at startup.
    pub config: Arc<ServerConfig>,
    /// Session token issuer/verifier holding the signing secret.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: todo_db::DbPool, config: ServerConfig) -> Self {
        let tokens = TokenService::new(&config.jwt);
        Self {
            pool,
            config: Arc::new(config),
            tokens,
        }
    }
}
