use serde::Serialize;

use crate::storage::Link;

/// Data handed to the platform share sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// 分享的是原始 URL，而不是短链接
    pub fn for_link(link: &Link) -> Self {
        Self {
            title: link.name.clone(),
            text: format!("Check out: {}", link.name),
            url: link.url.clone(),
        }
    }
}
