//! Session token issuance and verification.
//!
//! Session tokens are HS256-signed JWTs containing a [`Claims`] payload. They
//! are stateless: nothing is stored server-side, a token stays valid until its
//! `exp`, and logging out only clears the client's cookie.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use todo_core::types::{DbId, Timestamp};

use crate::config::ConfigError;

/// Fixed validity window of a session token (and of its cookie), in seconds.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp). Invalid from this second on.
    pub exp: i64,
}

/// A presented token could not be resolved to a subject.
///
/// Deliberately carries no detail: expired, tampered, signed with another key,
/// and malformed tokens are indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid session token")]
pub struct TokenInvalid;

/// Configuration for session token signing.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration through `lookup` (normally `std::env::var`).
    ///
    /// | Env Var      | Required | Default |
    /// |--------------|----------|---------|
    /// | `JWT_SECRET` | **yes**  | --      |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        if secret.trim().is_empty() {
            return Err(ConfigError::Empty("JWT_SECRET"));
        }
        Ok(Self { secret })
    }
}

/// Issues and verifies session tokens with a process-wide, immutable secret.
///
/// Cheap to clone; the keys are shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
        }
    }

    /// Mint a token for `subject`, valid for [`SESSION_TTL_SECS`] from now.
    pub fn issue(&self, subject: DbId) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(subject, Utc::now())
    }

    /// Mint a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: DbId,
        now: Timestamp,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: subject,
            iat,
            exp: (now + Duration::seconds(SESSION_TTL_SECS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
    }

    /// Resolve a token to its subject at the current time.
    pub fn verify(&self, token: &str) -> Result<DbId, TokenInvalid> {
        self.verify_at(token, Utc::now())
    }

    /// Resolve a token to its subject as if the current time were `now`.
    ///
    /// Only HS256 is accepted. The signature check is the library's constant
    /// time HMAC comparison. A token is expired once `now >= exp`.
    pub fn verify_at(&self, token: &str, now: Timestamp) -> Result<DbId, TokenInvalid> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the supplied clock, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|_| TokenInvalid)?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenInvalid);
        }
        Ok(data.claims.sub)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}
