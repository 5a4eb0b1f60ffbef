use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::errors::LinkshelfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A message surfaced to the user after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// 按错误类型生成提示文案
    pub fn from_error(err: &LinkshelfError) -> Self {
        let message = match err {
            LinkshelfError::DuplicateLink(_) => "This link has already been added!".to_string(),
            LinkshelfError::StorageWrite(_) => {
                "Could not save the links. Local storage may be full or unavailable.".to_string()
            }
            LinkshelfError::Validation(msg) => msg.clone(),
            other => other.format_simple(),
        };
        Self::error(message)
    }

    /// 格式化为彩色输出（用于 CLI）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self.level {
            NoticeLevel::Info => format!("{} {}", "ℹ".bold().blue(), self.message),
            NoticeLevel::Success => format!("{} {}", "✓".bold().green(), self.message),
            NoticeLevel::Error => format!("{} {}", "✗".bold().red(), self.message.white()),
        }
    }
}
