//! Persistence error definitions

/// Persistence error types
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),
    /// Resource name or path cannot hold records
    #[error("Invalid resource: {0}")]
    InvalidResource(String),
    /// Stored document is not a sequence of records
    #[error("Format error: {0}")]
    Format(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistError::NotFound(_))
    }
}

/// Result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;
