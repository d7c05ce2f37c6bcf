//! Submit Handler - 提交上传并启动进度轮询

use std::sync::Arc;

use crate::application::commands::handlers::ProgressPoller;
use crate::application::commands::transcription_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{TranscriptionApiPort, UiElement, UiSurfacePort};

/// SubmitUpload Handler
///
/// 只有 202 才显示进度条与指示器并开始轮询；其他情况只记录日志。
pub struct SubmitUploadHandler {
    api: Arc<dyn TranscriptionApiPort>,
    ui: Arc<dyn UiSurfacePort>,
    poller: ProgressPoller,
}

impl SubmitUploadHandler {
    pub fn new(
        api: Arc<dyn TranscriptionApiPort>,
        ui: Arc<dyn UiSurfacePort>,
        poller: ProgressPoller,
    ) -> Self {
        Self { api, ui, poller }
    }

    pub async fn handle(
        &self,
        cmd: SubmitUploadCommand,
    ) -> Result<TranscriptionResult, ApplicationError> {
        let source_name = cmd.form.file_name();

        tracing::info!(
            file = %cmd.form.file_path.display(),
            field = %cmd.form.file_field,
            extra_fields = cmd.form.fields.len(),
            "Submitting upload"
        );

        let job_id = match self.api.submit(&cmd.form).await {
            Ok(job_id) => job_id,
            Err(e) => {
                tracing::error!(file = %source_name, error = %e, "Failed to start transcription");
                return Err(ApplicationError::from_submit(e));
            }
        };

        tracing::info!(job_id = %job_id, "Upload accepted");

        self.ui.set_visible(UiElement::ProgressBar, true);
        self.ui.set_visible(UiElement::Spinner, true);

        let report = self.poller.handle(PollProgressCommand { job_id }).await?;

        Ok(TranscriptionResult {
            source_name,
            report,
        })
    }
}
