//! HTTP services
//!
//! Each service exposes a `*_routes()` scope. All scopes are mounted under
//! the configured base path by the server.

pub mod api;
pub mod frontend;
pub mod health;
pub mod links;

use url::Url;

pub use api::{ApiService, api_routes};
pub use frontend::{FrontendService, frontend_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use links::{LinkActions, links_routes};

/// 站点信息（由服务器启动时根据配置生成）
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// 以 `/` 结尾的基础路径
    pub base_path: String,
    /// 源 + 基础路径
    pub base_url: Url,
}

impl SiteContext {
    pub fn new(origin: &Url, base_path: &str) -> Result<Self, url::ParseError> {
        let base_path = normalize_base_path(base_path);
        let base_url = origin.join(&base_path)?;
        Ok(Self {
            base_path,
            base_url,
        })
    }

    /// actix scope 前缀（根路径时为空）
    pub fn scope_prefix(&self) -> &str {
        self.base_path.trim_end_matches('/')
    }
}

/// 规范化为 `/xxx/` 形式
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("shelf"), "/shelf/");
        assert_eq!(normalize_base_path("/shelf/"), "/shelf/");
    }

    #[test]
    fn test_site_context() {
        let origin = Url::parse("http://127.0.0.1:8080").unwrap();
        let site = SiteContext::new(&origin, "shelf").unwrap();
        assert_eq!(site.base_url.as_str(), "http://127.0.0.1:8080/shelf/");
        assert_eq!(site.scope_prefix(), "/shelf");
        assert_eq!(SiteContext::new(&origin, "/").unwrap().scope_prefix(), "");
    }
}
