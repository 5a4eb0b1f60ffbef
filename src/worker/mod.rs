//! Offline asset cache worker
//!
//! Precaches the app's static assets into a versioned bucket, evicts buckets
//! from older versions on activation and serves known assets cache-first.

pub mod cache_storage;
pub mod fetcher;
pub mod lifecycle;
pub mod manifest;

pub use cache_storage::{CacheBucket, CacheStorage};
pub use fetcher::{
    AssetRequest, AssetResponse, EmbeddedOrigin, Fetcher, HttpFetcher, NetworkFetcher,
    content_type_for,
};
pub use lifecycle::{AssetWorker, AssetWorkerHandle, FetchOutcome, WorkerPhase, WorkerStatus};
pub use manifest::{AssetManifest, STATIC_ASSETS, cache_key};

/// 当前版本的缓存桶名称
pub const DEFAULT_CACHE_NAME: &str = "linkshelf-cache-v1";
