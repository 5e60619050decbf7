//! Identity resolution for requests.
//!
//! - [`gate::request_gate`] -- per-request allow / redirect decision for pages.
//! - [`auth::AuthUser`] -- extractor that independently resolves the subject
//!   for API handlers, rejecting with 401.

pub mod auth;
pub mod gate;
