//! Transcript Store Port - 转写结果导出

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 转写结果存储错误
#[derive(Debug, Error)]
pub enum TranscriptStoreError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Transcript Store Port
#[async_trait]
pub trait TranscriptStorePort: Send + Sync {
    /// 保存完整转写文本，返回写入的文件路径
    ///
    /// `source_name` 为上传文件名，用于生成结果文件名。
    async fn save(&self, transcript: &str, source_name: &str)
        -> Result<PathBuf, TranscriptStoreError>;
}
