//! Clipboard Port - 系统剪贴板抽象

use async_trait::async_trait;
use thiserror::Error;

/// 剪贴板错误
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// 没有可用的剪贴板程序
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard access denied: {0}")]
    PermissionDenied(String),

    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),
}

/// Clipboard Port
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// 写入文本到剪贴板
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
