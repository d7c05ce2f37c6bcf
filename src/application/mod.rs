//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（转写服务、界面状态、剪贴板、提示、结果存储）
//! - commands: 命令及处理器（提交上传、轮询进度、复制、导出）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{
        CopyTranscriptHandler, ExportTranscriptHandler, ProgressPoller, SubmitUploadHandler,
        DEFAULT_POLL_INTERVAL,
    },
    CopyTranscriptCommand, ExportTranscriptCommand, ExportTranscriptResponse,
    PollProgressCommand, PollReport, SubmitUploadCommand, TranscriptionResult,
};

pub use error::ApplicationError;

pub use ports::{
    ClipboardError, ClipboardPort, JobApiError, NotifierPort, TranscriptStoreError,
    TranscriptStorePort, TranscriptionApiPort, UiElement, UiSurfacePort, UploadForm,
};
