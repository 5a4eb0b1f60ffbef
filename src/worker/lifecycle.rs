//! Asset worker actor
//!
//! The worker owns its phase and runs install/activate one at a time in its
//! command loop. Fetches are answered from spawned tasks so a slow network
//! response never blocks lifecycle commands.

use std::sync::Arc;

use serde::Serialize;
use strum::{AsRefStr, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, trace, warn};

use super::cache_storage::CacheStorage;
use super::fetcher::{AssetRequest, AssetResponse, Fetcher};
use super::manifest::AssetManifest;
use crate::errors::{LinkshelfError, Result};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkerPhase {
    Parsed,
    Installing,
    Installed,
    Activating,
    Activated,
}

impl WorkerPhase {
    fn is_installed(self) -> bool {
        matches!(self, WorkerPhase::Installed | WorkerPhase::Activated)
    }
}

/// 拦截结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 未拦截，由宿主自行走网络
    NotIntercepted,
    FromCache(AssetResponse),
    FromNetwork(AssetResponse),
}

impl FetchOutcome {
    pub fn response(&self) -> Option<&AssetResponse> {
        match self {
            FetchOutcome::NotIntercepted => None,
            FetchOutcome::FromCache(r) | FetchOutcome::FromNetwork(r) => Some(r),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerStatus {
    pub phase: WorkerPhase,
    pub cache_name: String,
    pub skip_waiting: bool,
    pub controlling: bool,
    pub cached_entries: usize,
}

enum Command {
    Install(oneshot::Sender<Result<usize>>),
    Activate(oneshot::Sender<Result<Vec<String>>>),
    Fetch {
        request: AssetRequest,
        reply: oneshot::Sender<Result<FetchOutcome>>,
    },
    Status(oneshot::Sender<WorkerStatus>),
}

pub struct AssetWorker {
    cache_name: String,
    manifest: Arc<AssetManifest>,
    storage: Arc<CacheStorage>,
    fetcher: Arc<dyn Fetcher>,
    phase: WorkerPhase,
    skip_waiting: bool,
    controlling: bool,
}

impl AssetWorker {
    pub fn new(
        cache_name: impl Into<String>,
        manifest: AssetManifest,
        storage: Arc<CacheStorage>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            cache_name: cache_name.into(),
            manifest: Arc::new(manifest),
            storage,
            fetcher,
            phase: WorkerPhase::Parsed,
            skip_waiting: false,
            controlling: false,
        }
    }

    /// 启动 actor，返回句柄
    pub fn spawn(self) -> AssetWorkerHandle {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let cache_name = self.cache_name.clone();
        tokio::spawn(self.run(rx));
        debug!("Asset worker spawned for cache {}", cache_name);
        AssetWorkerHandle { tx, cache_name }
    }

    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        while let Some(command) = rx.recv().await {
            match command {
                Command::Install(reply) => {
                    let _ = reply.send(self.install().await);
                }
                Command::Activate(reply) => {
                    let _ = reply.send(self.activate());
                }
                Command::Fetch { request, reply } => self.dispatch_fetch(request, reply),
                Command::Status(reply) => {
                    let _ = reply.send(self.status());
                }
            }
        }
        debug!("Asset worker for {} stopped", self.cache_name);
    }

    async fn install(&mut self) -> Result<usize> {
        info!("Asset worker installing into {}", self.cache_name);
        let previous = self.phase;
        self.phase = WorkerPhase::Installing;

        let bucket = self.storage.open(&self.cache_name);
        match bucket
            .add_all(self.fetcher.as_ref(), self.manifest.urls())
            .await
        {
            Ok(count) => {
                info!("Cached {} static assets", count);
                self.skip_waiting = true;
                // 已激活时重新安装不改变控制状态
                self.phase = if previous == WorkerPhase::Activated {
                    WorkerPhase::Activated
                } else {
                    WorkerPhase::Installed
                };
                Ok(count)
            }
            Err(e) => {
                error!("Failed to cache static assets: {}", e);
                self.phase = previous;
                Err(e)
            }
        }
    }

    fn activate(&mut self) -> Result<Vec<String>> {
        if !self.phase.is_installed() {
            return Err(LinkshelfError::asset_cache(format!(
                "Cannot activate a worker in phase {}",
                self.phase
            )));
        }
        info!("Asset worker activating");
        self.phase = WorkerPhase::Activating;

        let mut removed = Vec::new();
        for name in self.storage.keys() {
            if name != self.cache_name && self.storage.delete(&name) {
                info!("Removed stale cache {}", name);
                removed.push(name);
            }
        }

        self.controlling = true;
        self.phase = WorkerPhase::Activated;
        info!("Asset worker activated and controlling fetches");
        Ok(removed)
    }

    fn dispatch_fetch(&self, request: AssetRequest, reply: oneshot::Sender<Result<FetchOutcome>>) {
        if !request.is_get() || !self.controlling {
            trace!("Not intercepting {} {}", request.method, request.url);
            let _ = reply.send(Ok(FetchOutcome::NotIntercepted));
            return;
        }

        let manifest = self.manifest.clone();
        let storage = self.storage.clone();
        let fetcher = self.fetcher.clone();
        tokio::spawn(async move {
            let outcome = respond(&request, &manifest, &storage, fetcher.as_ref()).await;
            let _ = reply.send(outcome);
        });
    }

    fn status(&self) -> WorkerStatus {
        WorkerStatus {
            phase: self.phase,
            cache_name: self.cache_name.clone(),
            skip_waiting: self.skip_waiting,
            controlling: self.controlling,
            cached_entries: self
                .storage
                .get(&self.cache_name)
                .map(|b| b.len())
                .unwrap_or(0),
        }
    }
}

/// 静态资源走缓存优先，其余直接走网络；未命中时不回写缓存
async fn respond(
    request: &AssetRequest,
    manifest: &AssetManifest,
    storage: &CacheStorage,
    fetcher: &dyn Fetcher,
) -> Result<FetchOutcome> {
    if manifest.is_static_asset(&request.url) {
        if let Some(cached) = storage.match_url(&request.url).await {
            trace!("Cache hit for {}", request.url);
            return Ok(FetchOutcome::FromCache(cached));
        }
        debug!("Cache miss for static asset {}", request.url);
    }

    fetcher
        .fetch(&request.url)
        .await
        .map(FetchOutcome::FromNetwork)
        .inspect_err(|e| warn!("Network fetch for {} failed: {}", request.url, e))
}

/// Cloneable handle to a running [`AssetWorker`]
#[derive(Clone)]
pub struct AssetWorkerHandle {
    tx: mpsc::Sender<Command>,
    cache_name: String,
}

impl AssetWorkerHandle {
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    async fn call<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| LinkshelfError::worker_unavailable("Asset worker has stopped"))?;
        rx.await
            .map_err(|_| LinkshelfError::worker_unavailable("Asset worker dropped the request"))
    }

    pub async fn install(&self) -> Result<usize> {
        self.call(Command::Install).await?
    }

    pub async fn activate(&self) -> Result<Vec<String>> {
        self.call(Command::Activate).await?
    }

    pub async fn fetch(&self, request: AssetRequest) -> Result<FetchOutcome> {
        self.call(|reply| Command::Fetch { request, reply }).await?
    }

    pub async fn status(&self) -> Result<WorkerStatus> {
        self.call(Command::Status).await
    }

    /// install 成功后立即 activate（skip_waiting）
    pub async fn install_and_activate(&self) -> Result<WorkerStatus> {
        self.install().await?;
        self.activate().await?;
        self.status().await
    }
}
