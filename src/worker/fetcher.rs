//! Network side of the asset worker
//!
//! `EmbeddedOrigin` plays the app's own origin (assets compiled into the
//! binary, optionally overridden from a directory), `HttpFetcher` reaches
//! cross-origin URLs, and `NetworkFetcher` routes between the two.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use rust_embed::Embed;
use tracing::{trace, warn};
use ureq::Agent;
use url::Url;

use crate::errors::{LinkshelfError, Result};

/// 内嵌的静态资源
#[derive(Embed)]
#[folder = "assets/"]
struct StaticAssets;

/// 拦截到的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub method: String,
    pub url: Url,
}

impl AssetRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: "GET".to_string(),
            url,
        }
    }

    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            method: method.into(),
            url,
        }
    }

    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case("GET")
    }
}

/// 响应（缓存中保存的也是它）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Bytes,
}

impl AssetResponse {
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(404, "text/plain; charset=utf-8", "File not found")
    }

    /// 2xx
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 发起网络请求；能拿到响应（包括 404）即为 Ok，连接失败等为 Err
    async fn fetch(&self, url: &Url) -> Result<AssetResponse>;
}

/// 根据文件扩展名确定 Content-Type
pub fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

/// 应用自身的源：内嵌资源 + 可选的磁盘覆盖目录
#[derive(Debug, Clone, Default)]
pub struct EmbeddedOrigin {
    override_dir: Option<PathBuf>,
}

impl EmbeddedOrigin {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }

    /// 按 URL 路径读取资源
    pub fn read(&self, path: &str) -> Option<Bytes> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
            return None;
        }

        if let Some(dir) = &self.override_dir {
            let candidate = dir.join(relative);
            if let Ok(bytes) = std::fs::read(&candidate) {
                trace!("Serving {} from override dir", relative);
                return Some(Bytes::from(bytes));
            }
        }

        StaticAssets::get(relative).map(|file| Bytes::from(file.data.into_owned()))
    }

    /// 按路径生成响应，找不到时为 404
    pub fn respond(&self, path: &str) -> AssetResponse {
        match self.read(path) {
            Some(body) => AssetResponse::new(200, content_type_for(path), body),
            None => {
                trace!("Origin has no asset at {}", path);
                AssetResponse::not_found()
            }
        }
    }
}

#[async_trait]
impl Fetcher for EmbeddedOrigin {
    async fn fetch(&self, url: &Url) -> Result<AssetResponse> {
        Ok(self.respond(url.path()))
    }
}

/// 跨源请求（ureq，放在阻塞线程池里执行）
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }

    fn fetch_sync(agent: Agent, url: String) -> Result<AssetResponse> {
        let resp = agent.get(&url).call().map_err(|e| {
            warn!("Request to \"{}\" failed: {}", url, e);
            LinkshelfError::network(format!("Request to {} failed: {}", url, e))
        })?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let body = resp.into_body().read_to_vec().map_err(|e| {
            LinkshelfError::network(format!("Reading response from {} failed: {}", url, e))
        })?;

        Ok(AssetResponse::new(status, content_type, body))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<AssetResponse> {
        let agent = self.agent.clone();
        let url = url.to_string();

        tokio::task::spawn_blocking(move || Self::fetch_sync(agent, url))
            .await
            .map_err(|e| LinkshelfError::network(format!("Fetch task failed: {}", e)))?
    }
}

/// 按源路由：同源走 `EmbeddedOrigin`，其他走远程 fetcher
pub struct NetworkFetcher {
    base: Url,
    local: EmbeddedOrigin,
    remote: Box<dyn Fetcher>,
}

impl NetworkFetcher {
    /// `base` 为应用的基础 URL（源 + 基础路径）
    pub fn new(base: Url, local: EmbeddedOrigin, remote: Box<dyn Fetcher>) -> Self {
        Self {
            base,
            local,
            remote,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl Fetcher for NetworkFetcher {
    async fn fetch(&self, url: &Url) -> Result<AssetResponse> {
        if url.origin() != self.base.origin() {
            return self.remote.fetch(url).await;
        }
        match url.path().strip_prefix(self.base.path()) {
            Some(relative) => Ok(self.local.respond(relative)),
            None => Ok(AssetResponse::not_found()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("/static/style.css"), "text/css");
        assert_eq!(content_type_for("/static/app.js"), "application/javascript");
        assert_eq!(content_type_for("/icons/icon.svg"), "image/svg+xml");
        assert_eq!(content_type_for("/blob"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_embedded_origin_serves_assets() {
        let origin = EmbeddedOrigin::default();
        let url = Url::parse("http://localhost/static/style.css").unwrap();
        let resp = origin.fetch(&url).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type, "text/css");
        assert!(!resp.body.is_empty());

        let missing = Url::parse("http://localhost/static/missing.css").unwrap();
        assert_eq!(origin.fetch(&missing).await.unwrap().status, 404);
    }

    #[tokio::test]
    async fn test_override_dir_wins() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/style.css"), "body{}").unwrap();

        let origin = EmbeddedOrigin::new(Some(dir.path().to_path_buf()));
        let url = Url::parse("http://localhost/static/style.css").unwrap();
        assert_eq!(origin.fetch(&url).await.unwrap().body, Bytes::from("body{}"));
    }

    struct Unreachable;

    #[async_trait]
    impl Fetcher for Unreachable {
        async fn fetch(&self, url: &Url) -> Result<AssetResponse> {
            Err(LinkshelfError::network(format!("offline: {}", url)))
        }
    }

    #[tokio::test]
    async fn test_network_fetcher_routes_by_origin() {
        let base = Url::parse("http://127.0.0.1:8080/shelf/").unwrap();
        let fetcher = NetworkFetcher::new(base, EmbeddedOrigin::default(), Box::new(Unreachable));

        let local = Url::parse("http://127.0.0.1:8080/shelf/static/app.js").unwrap();
        assert_eq!(fetcher.fetch(&local).await.unwrap().status, 200);

        let outside = Url::parse("http://127.0.0.1:8080/static/app.js").unwrap();
        assert_eq!(fetcher.fetch(&outside).await.unwrap().status, 404);

        let remote = Url::parse("https://cdn.example.com/qr.js").unwrap();
        assert!(fetcher.fetch(&remote).await.is_err());
    }

    #[test]
    fn test_parent_segments_rejected() {
        let origin = EmbeddedOrigin::default();
        assert!(origin.read("/../Cargo.toml").is_none());
        assert!(origin.read("/").is_none());
    }
}
