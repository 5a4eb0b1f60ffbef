//! Short-link redirect resolver
//!
//! A short link is `<page path>#<id>`. When the page is loaded (or its
//! fragment changes) the fragment is looked up among the stored links: a hit
//! opens the target in a new browsing context, and the fragment is cleared
//! either way.

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::link_book::LinkBook;
use crate::storage::Link;

/// 页面位置与打开新窗口的能力
pub trait Navigator {
    /// 当前片段（不含 `#`）
    fn fragment(&self) -> Option<String>;

    /// 清除片段（保留路径与查询串）
    fn clear_fragment(&mut self);

    /// 在新的浏览上下文中打开 URL
    fn open_in_new_context(&mut self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// 没有片段，什么都不做
    NoFragment,
    /// 找到链接并已打开
    Opened(Link),
    /// 片段未匹配任何链接，已清除
    NotFound(String),
}

pub struct ShortLinkResolver;

impl ShortLinkResolver {
    pub fn resolve<N: Navigator + ?Sized>(navigator: &mut N, links: &LinkBook) -> RedirectOutcome {
        let short_id = match navigator.fragment() {
            Some(fragment) if !fragment.is_empty() => fragment,
            _ => return RedirectOutcome::NoFragment,
        };

        debug!("Resolving short id: {}", short_id);
        match links.find(&short_id) {
            Some(link) => {
                debug!("Short id {} -> {}", short_id, link.url);
                navigator.clear_fragment();
                navigator.open_in_new_context(&link.url);
                RedirectOutcome::Opened(link.clone())
            }
            None => {
                warn!("Short id not found: {}", short_id);
                navigator.clear_fragment();
                RedirectOutcome::NotFound(short_id)
            }
        }
    }
}

/// 计算短链接：去掉路径末尾的 `index.html`，再拼接 `#<id>`
pub fn short_link(base_path: &str, id: &str) -> String {
    let base = base_path.strip_suffix("index.html").unwrap_or(base_path);
    format!("{}#{}", base, id)
}

/// 记录导航动作的 Navigator
///
/// Web 端由页面脚本执行记录下来的动作；CLI 直接打印要打开的地址。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordingNavigator {
    #[serde(skip)]
    fragment: Option<String>,
    pub clear_fragment: bool,
    pub open: Option<String>,
}

impl RecordingNavigator {
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        let fragment = fragment.strip_prefix('#').unwrap_or(&fragment).to_string();
        Self {
            fragment: Some(fragment),
            ..Self::default()
        }
    }

    /// 从完整短链接或 `#id`/`id` 形式的参数构建
    pub fn from_target(target: &str) -> Self {
        let target = target.trim();
        if let Ok(url) = Url::parse(target) {
            return match url.fragment() {
                Some(fragment) => Self::with_fragment(fragment),
                None => Self::default(),
            };
        }
        match target.split_once('#') {
            Some((_, fragment)) => Self::with_fragment(fragment),
            None => Self::with_fragment(target),
        }
    }

    pub fn current_fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl Navigator for RecordingNavigator {
    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn clear_fragment(&mut self) {
        self.fragment = None;
        self.clear_fragment = true;
    }

    fn open_in_new_context(&mut self, url: &str) {
        self.open = Some(url.to_string());
    }
}
