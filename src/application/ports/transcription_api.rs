//! Transcription API Port - 转写服务抽象
//!
//! 外部转写服务的两个端点：
//! - `POST /` 提交上传，202 返回 `{"job_id": ...}`
//! - `GET /progress/{job_id}` 查询进度，200 返回进度快照

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{JobId, ProgressSnapshot};

/// 转写服务错误
#[derive(Debug, Error)]
pub enum JobApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 服务端在进度响应里报告了任务错误（如 `Job not found`）
    #[error("Job failed: {0}")]
    JobFailed(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 上传表单
///
/// 一个文件字段加任意文本字段，对应页面上的上传表单。
#[derive(Debug, Clone)]
pub struct UploadForm {
    /// 文件字段名（服务端读取 `file`）
    pub file_field: String,
    /// 待上传文件路径
    pub file_path: PathBuf,
    /// 其他文本字段
    pub fields: Vec<(String, String)>,
}

impl UploadForm {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_field: "file".to_string(),
            file_path: file_path.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_file_field(mut self, name: impl Into<String>) -> Self {
        self.file_field = name.into();
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// 上传文件名（不含目录）
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }
}

/// Transcription API Port
#[async_trait]
pub trait TranscriptionApiPort: Send + Sync {
    /// 提交上传
    ///
    /// 仅 202 视为接受；其他状态码返回 `UnexpectedStatus`。
    async fn submit(&self, form: &UploadForm) -> Result<JobId, JobApiError>;

    /// 查询一次进度
    ///
    /// 仅 200 视为成功；其他状态码返回 `UnexpectedStatus`。
    async fn fetch_progress(&self, job_id: &JobId) -> Result<ProgressSnapshot, JobApiError>;
}
