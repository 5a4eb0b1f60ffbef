//! Asset cache worker tests
//!
//! Covers the lifecycle (install, activate, stale bucket eviction) and the
//! fetch routing (cache-first for manifest assets, network otherwise).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use linkshelf::errors::{LinkshelfError, Result};
use linkshelf::worker::{
    AssetManifest, AssetRequest, AssetResponse, AssetWorker, AssetWorkerHandle, CacheStorage,
    FetchOutcome, Fetcher, WorkerPhase,
};
use url::Url;

const CACHE: &str = "linkshelf-cache-v2";

/// Fake network: serves every path with a counter, or fails when offline
#[derive(Default)]
struct FakeNetwork {
    requests: AtomicUsize,
    offline: std::sync::atomic::AtomicBool,
}

impl FakeNetwork {
    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Fetcher for FakeNetwork {
    async fn fetch(&self, url: &Url) -> Result<AssetResponse> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(LinkshelfError::network(format!("offline: {}", url)));
        }
        let n = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(AssetResponse::new(
            200,
            "text/plain",
            format!("{} #{}", url.path(), n),
        ))
    }
}

fn origin() -> Url {
    Url::parse("http://127.0.0.1:8080/").unwrap()
}

fn url(path: &str) -> Url {
    origin().join(path).unwrap()
}

fn spawn(storage: Arc<CacheStorage>, network: Arc<FakeNetwork>) -> AssetWorkerHandle {
    let manifest = AssetManifest::new(
        origin(),
        &["https://cdn.example.com/lib/qr.min.js".to_string()],
    );
    AssetWorker::new(CACHE, manifest, storage, network).spawn()
}

#[tokio::test]
async fn test_install_populates_bucket() {
    let storage = Arc::new(CacheStorage::new());
    let network = Arc::new(FakeNetwork::default());
    let worker = spawn(storage.clone(), network.clone());

    let count = worker.install().await.unwrap();
    assert_eq!(count, 5);
    assert_eq!(network.requests(), 5);

    let bucket = storage.get(CACHE).unwrap();
    assert_eq!(bucket.len(), 5);
    assert!(
        bucket
            .keys()
            .contains(&"https://cdn.example.com/lib/qr.min.js".to_string())
    );
    assert_eq!(worker.status().await.unwrap().phase, WorkerPhase::Installed);
}

#[tokio::test]
async fn test_activate_evicts_stale_buckets() {
    let storage = Arc::new(CacheStorage::new());
    storage.open("linkshelf-cache-v1");
    storage.open("something-else");

    let worker = spawn(storage.clone(), Arc::new(FakeNetwork::default()));
    let status = worker.install_and_activate().await.unwrap();

    assert_eq!(status.phase, WorkerPhase::Activated);
    assert!(status.controlling);
    assert_eq!(storage.keys(), vec![CACHE.to_string()]);

    // 再次激活时没有可删除的桶
    assert!(worker.activate().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cache_first_hit_and_miss() {
    let storage = Arc::new(CacheStorage::new());
    let network = Arc::new(FakeNetwork::default());
    let worker = spawn(storage.clone(), network.clone());
    worker.install_and_activate().await.unwrap();
    let after_install = network.requests();

    // 命中：不访问网络
    let outcome = worker
        .fetch(AssetRequest::get(url("/static/app.js")))
        .await
        .unwrap();
    assert!(matches!(outcome, FetchOutcome::FromCache(_)));
    assert_eq!(network.requests(), after_install);

    // 命中时即使离线也能返回
    network.go_offline();
    let outcome = worker
        .fetch(AssetRequest::get(url("/static/style.css")))
        .await
        .unwrap();
    let response = outcome.response().unwrap();
    assert_eq!(response.status, 200);
    assert!(matches!(outcome, FetchOutcome::FromCache(_)));

    // 带查询串的请求仍被拦截，但缓存键不同，离线时失败
    let result = worker
        .fetch(AssetRequest::get(url("/static/style.css?v=3")))
        .await;
    assert!(matches!(result, Err(LinkshelfError::Network(_))));
}

#[tokio::test]
async fn test_miss_goes_to_network_without_writing_back() {
    let storage = Arc::new(CacheStorage::new());
    let network = Arc::new(FakeNetwork::default());
    let worker = spawn(storage.clone(), network.clone());
    worker.install_and_activate().await.unwrap();

    // 清空桶里的一个条目来模拟未命中
    storage.delete(CACHE);
    let bucket = storage.open(CACHE);

    let outcome = worker
        .fetch(AssetRequest::get(url("/manifest.json")))
        .await
        .unwrap();
    assert!(matches!(outcome, FetchOutcome::FromNetwork(_)));
    assert!(bucket.is_empty());
}

#[tokio::test]
async fn test_non_asset_and_non_get() {
    let network = Arc::new(FakeNetwork::default());
    let worker = spawn(Arc::new(CacheStorage::new()), network.clone());
    worker.install_and_activate().await.unwrap();
    let before = network.requests();

    let outcome = worker
        .fetch(AssetRequest::get(url("/api/links")))
        .await
        .unwrap();
    assert!(matches!(outcome, FetchOutcome::FromNetwork(_)));
    assert_eq!(network.requests(), before + 1);

    let outcome = worker
        .fetch(AssetRequest::new("POST", url("/static/app.js")))
        .await
        .unwrap();
    assert_eq!(outcome, FetchOutcome::NotIntercepted);
}

#[tokio::test]
async fn test_network_failure_surfaces() {
    let network = Arc::new(FakeNetwork::default());
    let worker = spawn(Arc::new(CacheStorage::new()), network.clone());
    worker.install_and_activate().await.unwrap();
    network.go_offline();

    let result = worker.fetch(AssetRequest::get(url("/other"))).await;
    assert!(matches!(result, Err(LinkshelfError::Network(_))));
}

#[tokio::test]
async fn test_failed_install_can_be_retried() {
    let network = Arc::new(FakeNetwork::default());
    network.go_offline();
    let worker = spawn(Arc::new(CacheStorage::new()), network.clone());

    assert!(worker.install().await.is_err());
    assert_eq!(worker.status().await.unwrap().phase, WorkerPhase::Parsed);
}
