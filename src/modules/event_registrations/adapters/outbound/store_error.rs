use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    Duplicate,

    /// Transient; the same unit of work may succeed when retried.
    #[error("serialization conflict: {0}")]
    SerializationConflict(String),

    #[error("backend error: {0}")]
    Backend(String),
}
