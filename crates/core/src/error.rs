use crate::types::DbId;

/// Domain-level error shared across the repository and HTTP layers.
///
/// `NotFound` is deliberately the only variant carrying structured data:
/// tenant-scoped lookups produce it whenever the `id AND user_id` filter
/// comes back empty, whether the row is missing or owned by another tenant.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid API key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Valid key, insufficient privilege (e.g. master-key-only operation).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
