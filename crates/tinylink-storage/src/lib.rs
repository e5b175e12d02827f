pub mod memory;

pub use memory::InMemoryRepository;
pub use tinylink_core::{ReadRepository, Repository, StorageError, UrlRecord};
