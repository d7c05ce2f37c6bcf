//! Clipboard Handler - 复制当前显示的转写文本

use std::sync::Arc;

use crate::application::commands::transcription_commands::CopyTranscriptCommand;
use crate::application::error::ApplicationError;
use crate::application::ports::{ClipboardPort, NotifierPort, UiSurfacePort};

pub const COPY_SUCCEEDED: &str = "Transcript copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy transcript to clipboard.";

/// CopyTranscript Handler
pub struct CopyTranscriptHandler {
    ui: Arc<dyn UiSurfacePort>,
    clipboard: Arc<dyn ClipboardPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl CopyTranscriptHandler {
    pub fn new(
        ui: Arc<dyn UiSurfacePort>,
        clipboard: Arc<dyn ClipboardPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            ui,
            clipboard,
            notifier,
        }
    }

    pub async fn handle(&self, _cmd: CopyTranscriptCommand) -> Result<(), ApplicationError> {
        let text = self.ui.transcript();

        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                tracing::debug!(len = text.len(), "Transcript copied");
                self.notifier.alert(COPY_SUCCEEDED).await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                self.notifier.alert(COPY_FAILED).await;
                Err(e.into())
            }
        }
    }
}
