//! Authentication primitives.
//!
//! - [`jwt`] -- session token issuance and verification ([`jwt::TokenService`]).
//! - [`cookie`] -- reading and writing the `token` session cookie.
//! - [`password`] -- Argon2id password hashing and verification.

pub mod cookie;
pub mod jwt;
pub mod password;
