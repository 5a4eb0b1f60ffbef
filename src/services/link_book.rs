//! In-memory link collection
//!
//! `LinkBook` owns the list the UI renders. Every mutation validates first
//! and only then touches the list, so a rejected operation leaves it as it was.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::{LinkshelfError, Result};
use crate::storage::{KeyValueStore, Link, load_links, save_links};
use crate::utils::{accept_url, generate_link_id};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBook {
    links: Vec<Link>,
}

impl LinkBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the collection stored under `key`; corrupt or missing data yields an empty book.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Self {
        Self {
            links: load_links(store, key),
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore, key: &str) -> Result<()> {
        save_links(store, key, &self.links)
    }

    /// 添加链接，ID 由当前时间生成
    pub fn add(&mut self, name: &str, raw_url: &str) -> Result<Link> {
        self.add_at(name, raw_url, Utc::now())
    }

    /// 添加链接，ID 由 `now` 生成
    pub fn add_at(&mut self, name: &str, raw_url: &str, now: DateTime<Utc>) -> Result<Link> {
        let final_url = accept_url(raw_url)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(LinkshelfError::validation("Link name cannot be empty"));
        }

        if self.contains_url(&final_url) {
            return Err(LinkshelfError::duplicate_link(format!(
                "This link has already been added: {}",
                final_url
            )));
        }

        let id = generate_link_id(now.timestamp_millis(), |candidate| {
            self.find(candidate).is_some()
        });

        let link = Link::new(id, name, final_url);
        debug!("Adding link {} -> {}", link.id, link.url);
        self.links.push(link.clone());
        Ok(link)
    }

    /// 删除链接，ID 不存在时静默返回 None
    pub fn delete(&mut self, id: &str) -> Option<Link> {
        let pos = self.links.iter().position(|link| link.id == id)?;
        Some(self.links.remove(pos))
    }

    pub fn find(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.links.iter().any(|link| link.url == url)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    pub fn as_slice(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl From<Vec<Link>> for LinkBook {
    fn from(links: Vec<Link>) -> Self {
        Self { links }
    }
}

impl<'a> IntoIterator for &'a LinkBook {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_add_normalizes_url() {
        let mut book = LinkBook::new();
        let link = book.add_at("Example", "example.com", at(36)).unwrap();
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.id, "10");
        assert_eq!(link.name, "Example");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_trims_name() {
        let mut book = LinkBook::new();
        let link = book.add("  Docs  ", "https://docs.rs").unwrap();
        assert_eq!(link.name, "Docs");
    }

    #[test]
    fn test_duplicate_url_is_rejected() {
        let mut book = LinkBook::new();
        book.add("A", "example.com").unwrap();

        let err = book.add("B", "https://example.com").unwrap_err();
        assert!(matches!(err, LinkshelfError::DuplicateLink(_)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let mut book = LinkBook::new();
        let err = book.add("A", "not a url").unwrap_err();
        assert!(matches!(err, LinkshelfError::Validation(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let mut book = LinkBook::new();
        let err = book.add("   ", "example.com").unwrap_err();
        assert!(matches!(err, LinkshelfError::Validation(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let mut book = LinkBook::new();
        let a = book.add_at("A", "a.com", at(1000)).unwrap();
        let b = book.add_at("B", "b.com", at(1000)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_delete_present_and_absent() {
        let mut book = LinkBook::new();
        let a = book.add_at("A", "a.com", at(1)).unwrap();
        book.add_at("B", "b.com", at(2)).unwrap();

        assert_eq!(book.delete(&a.id), Some(a));
        assert_eq!(book.len(), 1);

        assert_eq!(book.delete("missing"), None);
        assert_eq!(book.len(), 1);
    }
}
