/// Domain-level error taxonomy.
///
/// Mirrors the HTTP mapping used by the API layer: `Validation` -> 400,
/// `NotFound` -> 404, `Conflict` -> 409, `Internal` -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a `NotFound` error keyed by a numeric ID.
    pub fn not_found_id(entity: &'static str, id: crate::types::DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: id.to_string(),
        }
    }
}
