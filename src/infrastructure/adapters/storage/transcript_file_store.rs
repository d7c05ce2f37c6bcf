//! Transcript File Store - 文件系统转写结果存储
//!
//! 实现 TranscriptStorePort trait，文件名形如 `20240101_120000_talk.wav.txt`

use async_trait::async_trait;
use chrono::Local;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{TranscriptStoreError, TranscriptStorePort};

/// 文件系统转写结果存储
pub struct TranscriptFileStore {
    /// 存储根目录
    base_dir: PathBuf,
}

impl TranscriptFileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_name(timestamp: &str, source_name: &str) -> String {
        let safe: String = source_name
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        format!("{}_{}.txt", timestamp, safe)
    }
}

#[async_trait]
impl TranscriptStorePort for TranscriptFileStore {
    async fn save(
        &self,
        transcript: &str,
        source_name: &str,
    ) -> Result<PathBuf, TranscriptStoreError> {
        // 确保目录存在
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| TranscriptStoreError::IoError(e.to_string()))?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = self.base_dir.join(Self::file_name(&timestamp, source_name));

        fs::write(&path, transcript)
            .await
            .map_err(|e| TranscriptStoreError::IoError(e.to_string()))?;

        tracing::debug!(path = %path.display(), size = transcript.len(), "Transcript written");
        Ok(path)
    }
}
