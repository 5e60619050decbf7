use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// A configuration problem detected at startup. Always fatal: the server must
/// not begin serving traffic with a missing signing secret or unparsable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the signing secret has a default suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://todo.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Add the `Secure` attribute to the session cookie. True when
    /// `APP_ENV=production`.
    pub secure_cookies: bool,
    /// Session token signing configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, applying defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://todo.db`         |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    /// | `JWT_SECRET`           | required                   |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or("PORT", lookup("PORT"), 3000)?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://todo.db".into());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"), 30)?;

        let secure_cookies = lookup("APP_ENV").is_some_and(|env| env == "production");

        let jwt = JwtConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            secure_cookies,
            jwt,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
