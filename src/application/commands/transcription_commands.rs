//! Transcription Commands - 上传与轮询相关命令

use std::path::PathBuf;

use crate::application::ports::UploadForm;
use crate::domain::{JobId, ProgressSnapshot};

/// 提交上传命令
#[derive(Debug, Clone)]
pub struct SubmitUploadCommand {
    pub form: UploadForm,
}

/// 轮询进度命令
#[derive(Debug, Clone)]
pub struct PollProgressCommand {
    pub job_id: JobId,
}

/// 一条轮询链的结果
#[derive(Debug, Clone)]
pub struct PollReport {
    pub job_id: JobId,
    /// 最后一份（complete == true 的）快照
    pub snapshot: ProgressSnapshot,
    /// 本轮询链发出的请求数
    pub polls: u32,
}

/// 上传并完成转写的结果
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// 上传文件名
    pub source_name: String,
    pub report: PollReport,
}

/// 复制转写文本命令
#[derive(Debug, Clone, Default)]
pub struct CopyTranscriptCommand;

/// 导出转写文本命令
#[derive(Debug, Clone)]
pub struct ExportTranscriptCommand {
    pub transcript: String,
    pub source_name: String,
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportTranscriptResponse {
    pub path: PathBuf,
}
