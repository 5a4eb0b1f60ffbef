use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkshelfError {
    StorageRead(String),
    StorageWrite(String),
    Validation(String),
    DuplicateLink(String),
    NotFound(String),
    Serialization(String),
    Config(String),
    AssetCache(String),
    Network(String),
    FeatureUnavailable(String),
    WorkerUnavailable(String),
}

impl LinkshelfError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkshelfError::StorageRead(_) => "E001",
            LinkshelfError::StorageWrite(_) => "E002",
            LinkshelfError::Validation(_) => "E003",
            LinkshelfError::DuplicateLink(_) => "E004",
            LinkshelfError::NotFound(_) => "E005",
            LinkshelfError::Serialization(_) => "E006",
            LinkshelfError::Config(_) => "E007",
            LinkshelfError::AssetCache(_) => "E008",
            LinkshelfError::Network(_) => "E009",
            LinkshelfError::FeatureUnavailable(_) => "E010",
            LinkshelfError::WorkerUnavailable(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkshelfError::StorageRead(_) => "Storage Read Error",
            LinkshelfError::StorageWrite(_) => "Storage Write Error",
            LinkshelfError::Validation(_) => "Validation Error",
            LinkshelfError::DuplicateLink(_) => "Duplicate Link",
            LinkshelfError::NotFound(_) => "Resource Not Found",
            LinkshelfError::Serialization(_) => "Serialization Error",
            LinkshelfError::Config(_) => "Configuration Error",
            LinkshelfError::AssetCache(_) => "Asset Cache Error",
            LinkshelfError::Network(_) => "Network Error",
            LinkshelfError::FeatureUnavailable(_) => "Feature Unavailable",
            LinkshelfError::WorkerUnavailable(_) => "Worker Unavailable",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkshelfError::StorageRead(msg)
            | LinkshelfError::StorageWrite(msg)
            | LinkshelfError::Validation(msg)
            | LinkshelfError::DuplicateLink(msg)
            | LinkshelfError::NotFound(msg)
            | LinkshelfError::Serialization(msg)
            | LinkshelfError::Config(msg)
            | LinkshelfError::AssetCache(msg)
            | LinkshelfError::Network(msg)
            | LinkshelfError::FeatureUnavailable(msg)
            | LinkshelfError::WorkerUnavailable(msg) => msg,
        }
    }

    /// Whether the failure was caused by what the user submitted
    /// (as opposed to the environment failing underneath them).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            LinkshelfError::Validation(_)
                | LinkshelfError::DuplicateLink(_)
                | LinkshelfError::NotFound(_)
        )
    }

    /// 格式化为彩色输出（用于 CLI 与服务器日志）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于页面提示）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkshelfError {}

// 便捷的构造函数
impl LinkshelfError {
    pub fn storage_read<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::StorageRead(msg.into())
    }

    pub fn storage_write<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::StorageWrite(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Validation(msg.into())
    }

    pub fn duplicate_link<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::DuplicateLink(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Config(msg.into())
    }

    pub fn asset_cache<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::AssetCache(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::Network(msg.into())
    }

    pub fn feature_unavailable<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::FeatureUnavailable(msg.into())
    }

    pub fn worker_unavailable<T: Into<String>>(msg: T) -> Self {
        LinkshelfError::WorkerUnavailable(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LinkshelfError {
    fn from(err: std::io::Error) -> Self {
        LinkshelfError::StorageWrite(err.to_string())
    }
}

impl From<serde_json::Error> for LinkshelfError {
    fn from(err: serde_json::Error) -> Self {
        LinkshelfError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for LinkshelfError {
    fn from(err: url::ParseError) -> Self {
        LinkshelfError::Validation(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkshelfError {
    fn from(err: toml::ser::Error) -> Self {
        LinkshelfError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkshelfError {
    fn from(err: config::ConfigError) -> Self {
        LinkshelfError::Config(err.to_string())
    }
}

impl From<crate::utils::url_validator::UrlValidationError> for LinkshelfError {
    fn from(err: crate::utils::url_validator::UrlValidationError) -> Self {
        LinkshelfError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkshelfError>;
