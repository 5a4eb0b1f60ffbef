//! Named cache buckets
//!
//! Mirrors the browser's CacheStorage: buckets are opened by name, hold
//! request URL -> response pairs, and are deleted wholesale when the
//! version tag changes.

use std::sync::Arc;

use dashmap::DashMap;
use futures_util::future::join_all;
use moka::future::Cache;
use tracing::debug;
use url::Url;

use super::fetcher::{AssetResponse, Fetcher};
use super::manifest::cache_key;
use crate::errors::{LinkshelfError, Result};

pub struct CacheBucket {
    name: String,
    entries: Cache<String, AssetResponse>,
}

impl CacheBucket {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            // 不设容量上限：桶里只放清单中的资源
            entries: Cache::builder().build(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn put(&self, url: &Url, response: AssetResponse) {
        self.entries
            .insert(cache_key(url).to_string(), response)
            .await;
    }

    pub async fn match_url(&self, url: &Url) -> Option<AssetResponse> {
        self.entries.get(cache_key(url).as_str()).await
    }

    /// 全部抓取成功（2xx）才写入，任何一个失败都不写
    pub async fn add_all(&self, fetcher: &dyn Fetcher, urls: &[Url]) -> Result<usize> {
        let responses = join_all(urls.iter().map(|url| fetcher.fetch(url))).await;

        let mut fetched = Vec::with_capacity(urls.len());
        for (url, response) in urls.iter().zip(responses) {
            let response = response?;
            if !response.is_ok() {
                return Err(LinkshelfError::asset_cache(format!(
                    "Fetching {} returned status {}",
                    url, response.status
                )));
            }
            fetched.push((url, response));
        }

        let count = fetched.len();
        for (url, response) in fetched {
            self.put(url, response).await;
        }
        debug!("Cached {} assets in bucket {}", count, self.name);
        Ok(count)
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|(k, _)| k.as_ref().clone()).collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct CacheStorage {
    buckets: DashMap<String, Arc<CacheBucket>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开（不存在则创建）
    pub fn open(&self, name: &str) -> Arc<CacheBucket> {
        self.buckets
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(CacheBucket::new(name)))
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<CacheBucket>> {
        self.buckets.get(name).map(|b| b.value().clone())
    }

    pub fn keys(&self) -> Vec<String> {
        let mut names: Vec<String> = self.buckets.iter().map(|b| b.key().clone()).collect();
        names.sort();
        names
    }

    pub fn delete(&self, name: &str) -> bool {
        self.buckets.remove(name).is_some()
    }

    /// 在所有桶中查找
    pub async fn match_url(&self, url: &Url) -> Option<AssetResponse> {
        let buckets: Vec<Arc<CacheBucket>> =
            self.buckets.iter().map(|b| b.value().clone()).collect();
        for bucket in buckets {
            if let Some(response) = bucket.match_url(url).await {
                return Some(response);
            }
        }
        None
    }
}
