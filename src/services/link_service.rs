//! Link management service
//!
//! Provides the link operations shared by the web UI and the CLI: every
//! mutation is persisted immediately, and a failed write abandons it.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info};

use super::link_book::LinkBook;
use crate::errors::Result;
use crate::storage::{KeyValueStore, Link, StorageBackendInfo};

/// Service for link management operations
pub struct LinkService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    book: RwLock<LinkBook>,
}

impl LinkService {
    /// Load the stored collection; never fails (corrupt data resets to empty)
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let book = LinkBook::load(store.as_ref(), &key);
        info!("Loaded {} links", book.len());
        Self {
            store,
            key,
            book: RwLock::new(book),
        }
    }

    /// 添加链接并立即保存
    ///
    /// 在副本上修改并保存，保存成功后才替换内存中的列表。
    pub fn add_link(&self, name: &str, url: &str) -> Result<Link> {
        let mut book = self.book.write();

        let mut next = book.clone();
        let link = next.add(name, url)?;
        next.save(self.store.as_ref(), &self.key).map_err(|e| {
            error!("Link {} not added, storage write failed: {}", link.url, e);
            e
        })?;

        *book = next;
        info!("Link added: {} -> {}", link.id, link.url);
        Ok(link)
    }

    /// 删除链接并立即保存
    ///
    /// 返回是否真的删除了；ID 不存在时不写存储。
    pub fn delete_link(&self, id: &str) -> Result<bool> {
        let mut book = self.book.write();

        let mut next = book.clone();
        if next.delete(id).is_none() {
            return Ok(false);
        }
        next.save(self.store.as_ref(), &self.key).map_err(|e| {
            error!("Link {} not deleted, storage write failed: {}", id, e);
            e
        })?;

        *book = next;
        info!("Link deleted: {}", id);
        Ok(true)
    }

    pub fn find(&self, id: &str) -> Option<Link> {
        self.book.read().find(id).cloned()
    }

    /// Snapshot of the current collection
    pub fn links(&self) -> Vec<Link> {
        self.book.read().as_slice().to_vec()
    }

    pub fn snapshot(&self) -> LinkBook {
        self.book.read().clone()
    }

    pub fn len(&self) -> usize {
        self.book.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.read().is_empty()
    }

    /// 重新从存储读取
    pub fn reload(&self) {
        let book = LinkBook::load(self.store.as_ref(), &self.key);
        info!("Reloaded {} links", book.len());
        *self.book.write() = book;
    }

    pub fn backend_info(&self) -> StorageBackendInfo {
        StorageBackendInfo {
            storage_type: self.store.backend_name().to_string(),
            key: self.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LinkshelfError;
    use crate::storage::{DEFAULT_STORAGE_KEY, MemoryStore, load_links};

    #[test]
    fn test_add_persists_immediately() {
        let store = Arc::new(MemoryStore::new());
        let service = LinkService::load(store.clone(), DEFAULT_STORAGE_KEY);

        let link = service.add_link("Rust", "rust-lang.org").unwrap();
        let stored = load_links(store.as_ref(), DEFAULT_STORAGE_KEY);
        assert_eq!(stored, vec![link]);
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let store = Arc::new(MemoryStore::with_quota(64));
        let service = LinkService::load(store, DEFAULT_STORAGE_KEY);

        let err = service
            .add_link("Long", "https://example.com/a/very/long/path/that/will/not/fit")
            .unwrap_err();
        assert!(matches!(err, LinkshelfError::StorageWrite(_)));
        assert!(service.is_empty());
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let store = Arc::new(MemoryStore::new());
        let service = LinkService::load(store, DEFAULT_STORAGE_KEY);
        service.add_link("A", "a.com").unwrap();

        assert!(!service.delete_link("missing").unwrap());
        assert_eq!(service.len(), 1);
    }
}
