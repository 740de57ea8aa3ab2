//! Domain-level error type shared across the workspace.

/// Errors produced by domain logic and surfaced through the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Input failed validation; the write is rejected with no partial state.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or state conflict (e.g. duplicate slug).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
