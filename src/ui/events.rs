use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::services::{LinkService, Notice};

/// Mutations requested by the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiEvent {
    AddLink { name: String, url: String },
    DeleteLink { id: String },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::AddLink { .. } => "add-link",
            UiEvent::DeleteLink { .. } => "delete-link",
        }
    }

    /// 交给服务执行；删除不存在的 ID 时不产生提示
    pub fn apply(self, service: &LinkService) -> Result<Option<Notice>> {
        debug!("Applying UI event {}", self.name());
        match self {
            UiEvent::AddLink { name, url } => {
                let link = service.add_link(&name, &url)?;
                Ok(Some(Notice::success(format!("Link \"{}\" added.", link.name))))
            }
            UiEvent::DeleteLink { id } => Ok(service
                .delete_link(&id)?
                .then(|| Notice::success("Link deleted."))),
        }
    }
}

/// 添加表单的原始提交内容
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddLinkForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl AddLinkForm {
    /// 名称和 URL 去掉首尾空白后都非空才产生事件
    pub fn into_event(self) -> Option<UiEvent> {
        let name = self.name.trim();
        let url = self.url.trim();
        if name.is_empty() || url.is_empty() {
            return None;
        }
        Some(UiEvent::AddLink {
            name: name.to_string(),
            url: url.to_string(),
        })
    }
}
