use crate::error::Result;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub original_url: String,
}

impl UrlRecord {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`],
/// so lookup paths can be handed a repository without insert access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;

    /// Checks whether a short code already exists in the repository.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new URL record if the code is free.
    ///
    /// The check and the insert must be a single atomic step. Returns
    /// `Err(StorageError::Conflict)` if the code is already taken; the
    /// existing record is left untouched.
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;
}
