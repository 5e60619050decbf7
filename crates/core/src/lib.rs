//! Domain rules shared by the database and API crates.
//!
//! - [`routing`] -- static classification of request paths for the request gate.
//! - [`todo`] -- todo status values, list filters, and field validation.
//! - [`credentials`] -- email / password checks applied at registration and login.

pub mod credentials;
pub mod error;
pub mod routing;
pub mod todo;
pub mod types;
