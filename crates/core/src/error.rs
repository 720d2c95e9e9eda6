#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row matches the id. `id` is kept as the caller supplied it, so a
    /// malformed path segment is reported verbatim.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// A required body field was absent or could not be decoded.
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
