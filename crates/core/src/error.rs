use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// No subject could be resolved for the request. The message is what the
    /// client sees, so callers must keep it generic.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
