mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::Result;

/// 本地键值存储
///
/// 接口对应浏览器的 localStorage：同步读写，值是原始字符串。
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的原始文本，键不存在返回 `Ok(None)`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// 写入键值，容量不足或存储不可用时返回 `StorageWrite`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}
