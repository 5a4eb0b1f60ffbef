use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use url::Url;

use crate::api::services::{
    AppStartTime, SiteContext, api_routes, frontend_routes, health_routes, links_routes,
};
use crate::config::StaticConfig;
use crate::services::LinkService;
use crate::storage::StorageFactory;
use crate::worker::{
    AssetManifest, AssetWorker, AssetWorkerHandle, CacheStorage, EmbeddedOrigin, Fetcher,
    HttpFetcher, NetworkFetcher,
};

/// Everything the HTTP host shares between its workers
#[derive(Clone)]
pub struct StartupContext {
    pub link_service: Arc<LinkService>,
    pub worker: AssetWorkerHandle,
    pub network: Arc<dyn Fetcher>,
    pub site: SiteContext,
    pub start_time: AppStartTime,
}

impl StartupContext {
    /// 注册共享数据与全部路由
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.link_service.clone()))
            .app_data(web::Data::new(self.worker.clone()))
            .app_data(web::Data::new(self.network.clone()))
            .app_data(web::Data::new(self.site.clone()))
            .app_data(web::Data::new(self.start_time.clone()))
            .service(
                web::scope(self.site.scope_prefix())
                    .service(health_routes())
                    .service(api_routes())
                    .service(links_routes())
                    .service(frontend_routes()),
            );
    }
}

/// 应用的源地址（用于区分同源与跨源资源）
pub fn app_origin(config: &StaticConfig) -> Result<Url> {
    let host = match config.server.host.as_str() {
        "0.0.0.0" | "::" | "[::]" => "127.0.0.1",
        host => host,
    };
    let origin = format!("http://{}:{}/", host, config.server.port);
    Url::parse(&origin).with_context(|| format!("Invalid server address {}", origin))
}

/// 准备服务器启动的上下文：存储、链接服务与资源缓存 worker
///
/// 必须在 tokio 运行时中调用（worker 会立即 spawn）。
pub fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let store =
        StorageFactory::create(&config.storage).context("Failed to create storage backend")?;
    let link_service = Arc::new(LinkService::load(store, config.storage.key.clone()));

    let origin = app_origin(config)?;
    let site = SiteContext::new(&origin, &config.server.base_path)
        .context("Invalid server.base_path")?;

    let local = EmbeddedOrigin::new(config.assets.dir.as_ref().map(std::path::PathBuf::from));
    let remote = HttpFetcher::new(Duration::from_secs(config.assets.http_timeout_secs));
    let network: Arc<dyn Fetcher> = Arc::new(NetworkFetcher::new(
        site.base_url.clone(),
        local,
        Box::new(remote),
    ));

    let manifest = AssetManifest::new(site.base_url.clone(), &config.assets.extra_urls);
    debug!("Asset manifest has {} entries", manifest.len());
    let worker = AssetWorker::new(
        config.assets.cache_name.clone(),
        manifest,
        Arc::new(CacheStorage::new()),
        network.clone(),
    )
    .spawn();

    info!(
        "Pre-startup completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        link_service,
        worker,
        network,
        site,
        start_time: AppStartTime {
            start_datetime: chrono::Utc::now(),
        },
    })
}

/// 安装并激活资源缓存；失败时只记录警告，页面继续直接走网络
pub async fn start_asset_worker(worker: &AssetWorkerHandle) {
    match worker.install_and_activate().await {
        Ok(status) => info!(
            "Asset worker {} with {} cached entries in {}",
            status.phase, status.cached_entries, status.cache_name
        ),
        Err(e) => warn!("Asset cache unavailable, serving from network: {}", e),
    }
}
