//! Export Handler - 保存完成后的转写文本

use std::sync::Arc;

use crate::application::commands::transcription_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::TranscriptStorePort;

/// ExportTranscript Handler
pub struct ExportTranscriptHandler {
    store: Arc<dyn TranscriptStorePort>,
}

impl ExportTranscriptHandler {
    pub fn new(store: Arc<dyn TranscriptStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ExportTranscriptCommand,
    ) -> Result<ExportTranscriptResponse, ApplicationError> {
        let path = self.store.save(&cmd.transcript, &cmd.source_name).await?;
        tracing::info!(path = %path.display(), "Transcript saved");
        Ok(ExportTranscriptResponse { path })
    }

    /// 保存失败只记录日志，不影响任务结果
    pub async fn save_or_log(
        &self,
        cmd: ExportTranscriptCommand,
    ) -> Option<ExportTranscriptResponse> {
        match self.handle(cmd).await {
            Ok(saved) => Some(saved),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save transcript");
                None
            }
        }
    }
}
