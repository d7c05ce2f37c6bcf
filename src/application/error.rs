//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{ClipboardError, JobApiError, TranscriptStoreError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 上传未被接受（非 202）
    #[error("Failed to start transcription, status: {0}")]
    SubmissionRejected(u16),

    /// 进度查询失败（非 200）
    #[error("Failed to load progress, status: {0}")]
    ProgressRejected(u16),

    /// 服务端报告任务失败
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// 外部服务错误（网络、响应格式等）
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 剪贴板错误
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 提交阶段的服务错误
    pub fn from_submit(err: JobApiError) -> Self {
        match err {
            JobApiError::UnexpectedStatus { status, .. } => Self::SubmissionRejected(status),
            JobApiError::JobFailed(message) => Self::JobFailed(message),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }

    /// 轮询阶段的服务错误
    pub fn from_progress(err: JobApiError) -> Self {
        match err {
            JobApiError::UnexpectedStatus { status, .. } => Self::ProgressRejected(status),
            JobApiError::JobFailed(message) => Self::JobFailed(message),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<ClipboardError> for ApplicationError {
    fn from(err: ClipboardError) -> Self {
        Self::ClipboardError(err.to_string())
    }
}

impl From<TranscriptStoreError> for ApplicationError {
    fn from(err: TranscriptStoreError) -> Self {
        Self::StorageError(err.to_string())
    }
}
