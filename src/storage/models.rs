use serde::{Deserialize, Serialize};

/// 一条保存的链接
///
/// 持久化格式与字段顺序保持 `{id, name, url}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// 存储后端信息（健康检查使用）
#[derive(Debug, Clone, Serialize)]
pub struct StorageBackendInfo {
    pub storage_type: String,
    pub key: String,
}
