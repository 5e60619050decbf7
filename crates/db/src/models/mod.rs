//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - For todos, a `Deserialize` update DTO (all `Option` fields) for patches

pub mod todo;
pub mod user;
