use std::sync::Arc;

use tracing::info;

use crate::config::StorageConfig;
use crate::errors::{LinkshelfError, Result};

pub mod backends;
pub mod link_store;
pub mod models;

pub use backends::{FileStore, KeyValueStore, MemoryStore};
pub use link_store::{DEFAULT_STORAGE_KEY, load_links, save_links};
pub use models::{Link, StorageBackendInfo};

pub struct StorageFactory;

impl StorageFactory {
    /// 根据配置创建键值存储后端
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match config.backend.as_str() {
            "file" => Arc::new(FileStore::new(&config.data_dir)?),
            "memory" => match config.memory_quota_bytes {
                Some(quota) => Arc::new(MemoryStore::with_quota(quota)),
                None => Arc::new(MemoryStore::new()),
            },
            other => {
                return Err(LinkshelfError::config(format!(
                    "Unknown storage backend: {}. Valid: file, memory",
                    other
                )));
            }
        };

        info!("Using storage backend: {}", store.backend_name());
        Ok(store)
    }
}
