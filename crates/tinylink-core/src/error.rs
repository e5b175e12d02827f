use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenerError {
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("no free short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
