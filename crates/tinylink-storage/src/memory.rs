use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tinylink_core::error::Result;
use tinylink_core::{ReadRepository, Repository, ShortCode, StorageError, UrlRecord};
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards its locks, so reads and writes on different buckets don't
/// block each other. Each entry is written once under its shard lock and
/// never mutated afterwards, so readers see either no entry or a complete one.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code.as_str()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        // The entry guard holds the shard lock, so check-and-insert is atomic.
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => {
                trace!(code = %code, "short code already taken");
                Err(StorageError::Conflict(code.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }
}
