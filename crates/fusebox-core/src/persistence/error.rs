/// Errors raised while reading or writing persisted files
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to read {0}")]
    Read(String),

    #[error("Failed to write {0}")]
    Write(String),

    #[error("Failed to serialize data: {0}")]
    Serialization(String),

    #[error("Failed to deserialize data: {0}")]
    Deserialization(String),

    #[error("Unexpected record shape: {0}")]
    Shape(&'static str),
}
