use crate::types::Entity;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row exists for the requested id. `id` is the raw path value.
    #[error("{}", .entity.not_found_message())]
    NotFound { entity: Entity, id: String },

    /// The matched route's parameter shape does not fit the operation.
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
