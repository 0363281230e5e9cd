use crate::types::DbId;

/// Domain error taxonomy.
///
/// Every violated precondition in the orchestration layer is a distinct
/// variant; the API boundary owns the mapping from variant to response
/// code. Nothing below the boundary retries or recovers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A supplied reference (director id, genre id) points at nothing.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// A supplied value is outside its allowed domain.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Any other failure, treated as opaque infrastructure trouble.
    #[error("Internal error: {0}")]
    Internal(String),
}
