use tracing::warn;
use url::Url;

/// 安装时预缓存的静态资源
pub const STATIC_ASSETS: &[&str] = &[
    "/static/style.css",
    "/static/app.js",
    "/manifest.json",
    "/icons/icon.svg",
];

/// Static asset list resolved against the app's base URL
#[derive(Debug, Clone)]
pub struct AssetManifest {
    base: Url,
    urls: Vec<Url>,
}

impl AssetManifest {
    /// Builds the manifest from [`STATIC_ASSETS`] plus `extra` absolute URLs.
    pub fn new(base: Url, extra: &[String]) -> Self {
        let entries = STATIC_ASSETS
            .iter()
            .map(|s| s.to_string())
            .chain(extra.iter().cloned());
        Self::from_entries(base, entries)
    }

    /// 以 `/` 开头的条目相对于应用的基础路径解析
    pub fn from_entries<I>(base: Url, entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut urls: Vec<Url> = Vec::new();
        for entry in entries {
            let relative = match entry.strip_prefix('/') {
                Some(rest) if !rest.starts_with('/') => rest,
                _ => entry.as_str(),
            };
            match base.join(relative) {
                Ok(url) => {
                    let url = cache_key(&url);
                    if !urls.contains(&url) {
                        urls.push(url);
                    }
                }
                Err(e) => warn!("Skipping invalid asset entry {:?}: {}", entry, e),
            }
        }
        Self { base, urls }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// 是否为已知静态资源：同源且路径相同（查询串不参与比较）
    pub fn is_static_asset(&self, request_url: &Url) -> bool {
        self.urls.iter().any(|asset| {
            asset.origin() == request_url.origin() && asset.path() == request_url.path()
        })
    }
}

/// 缓存键：去掉片段的完整 URL
pub fn cache_key(url: &Url) -> Url {
    let mut key = url.clone();
    key.set_fragment(None);
    key
}
