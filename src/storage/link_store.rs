//! 链接列表的持久化
//!
//! 整个列表保存在一个键下，值是 `[{id, name, url}, ...]` 形式的 JSON 数组。
//! 读取永远不会失败：任何损坏的内容都重置为空列表。

use std::collections::HashSet;

use tracing::{debug, error, warn};

use super::backends::KeyValueStore;
use super::models::Link;
use crate::errors::{LinkshelfError, Result};

/// 默认存储键
pub const DEFAULT_STORAGE_KEY: &str = "pwa-links";

/// 读取链接列表
///
/// 键不存在、读取失败、JSON 损坏、顶层不是数组、元素不是链接：一律返回空列表。
/// 解析成功后丢弃 ID 或 URL 与前面条目重复的条目。
pub fn load_links(store: &dyn KeyValueStore, key: &str) -> Vec<Link> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored links under key {}", key);
            return Vec::new();
        }
        Err(e) => {
            error!("Failed to read stored links: {}", e);
            return Vec::new();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Stored links are not valid JSON, resetting to empty: {}", e);
            return Vec::new();
        }
    };

    if !value.is_array() {
        warn!("Stored links are not a JSON array, resetting to empty");
        return Vec::new();
    }

    let links: Vec<Link> = match serde_json::from_value(value) {
        Ok(links) => links,
        Err(e) => {
            warn!("Stored links contain malformed entries, resetting to empty: {}", e);
            return Vec::new();
        }
    };

    let links = dedupe(links);
    debug!("Loaded {} links from key {}", links.len(), key);
    links
}

/// 保存链接列表
pub fn save_links(store: &dyn KeyValueStore, key: &str, links: &[Link]) -> Result<()> {
    let json = serde_json::to_string(links)?;
    store.set_item(key, &json).map_err(|e| {
        error!("Failed to save links: {}", e);
        match e {
            LinkshelfError::StorageWrite(_) => e,
            other => LinkshelfError::storage_write(other.message().to_string()),
        }
    })?;
    debug!("Saved {} links under key {}", links.len(), key);
    Ok(())
}

fn dedupe(links: Vec<Link>) -> Vec<Link> {
    let mut seen_ids = HashSet::new();
    let mut seen_urls = HashSet::new();
    let mut kept = Vec::with_capacity(links.len());

    for link in links {
        if seen_ids.contains(&link.id) || seen_urls.contains(&link.url) {
            warn!(
                "Dropping stored link with duplicate id or url: {} ({})",
                link.id, link.url
            );
            continue;
        }
        seen_ids.insert(link.id.clone());
        seen_urls.insert(link.url.clone());
        kept.push(link);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(raw: &str) -> MemoryStore {
        let store = MemoryStore::new();
        store.set_item(DEFAULT_STORAGE_KEY, raw).unwrap();
        store
    }

    #[test]
    fn test_malformed_payloads_load_empty() {
        let payloads = [
            "",
            "not json",
            "{",
            "null",
            "42",
            "\"text\"",
            "{\"id\":\"a\",\"name\":\"n\",\"url\":\"https://a.com\"}",
            "[1, 2, 3]",
            "[{\"id\":\"a\"}]",
            "[{\"id\":1,\"name\":\"n\",\"url\":\"https://a.com\"}]",
        ];

        for payload in payloads {
            let store = store_with(payload);
            assert!(
                load_links(&store, DEFAULT_STORAGE_KEY).is_empty(),
                "payload {:?} should load empty",
                payload
            );
        }
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(load_links(&store, DEFAULT_STORAGE_KEY).is_empty());
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let store = store_with(
            r#"[
                {"id":"a","name":"A","url":"https://a.com"},
                {"id":"a","name":"A2","url":"https://other.com"},
                {"id":"b","name":"B","url":"https://a.com"},
                {"id":"c","name":"C","url":"https://c.com"}
            ]"#,
        );

        let links = load_links(&store, DEFAULT_STORAGE_KEY);
        let ids: Vec<&str> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let store = store_with(
            r#"[{"id":"a","name":"A","url":"https://a.com","created":"yesterday"}]"#,
        );
        assert_eq!(load_links(&store, DEFAULT_STORAGE_KEY).len(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let links = vec![
            Link::new("a", "A", "https://a.com"),
            Link::new("b", "B", "http://b.com/path"),
        ];
        save_links(&store, DEFAULT_STORAGE_KEY, &links).unwrap();
        assert_eq!(load_links(&store, DEFAULT_STORAGE_KEY), links);
    }

    #[test]
    fn test_save_failure_is_storage_write() {
        let store = MemoryStore::with_quota(4);
        let links = vec![Link::new("a", "A", "https://a.com")];
        let err = save_links(&store, DEFAULT_STORAGE_KEY, &links).unwrap_err();
        assert!(matches!(err, LinkshelfError::StorageWrite(_)));
    }
}
