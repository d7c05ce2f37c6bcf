//! Progress Poller - 轮询任务进度直到完成
//!
//! 显式循环：请求 → 更新界面 → 未完成则等待固定间隔后再请求。
//! 同一任务任意时刻最多只有一个请求在途；失败不重试、不退避。

use std::sync::Arc;
use std::time::Duration;

use crate::application::commands::transcription_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{TranscriptionApiPort, UiElement, UiSurfacePort};
use crate::domain::ProgressSnapshot;

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// ProgressPoller - 轮询一个任务的进度
pub struct ProgressPoller {
    api: Arc<dyn TranscriptionApiPort>,
    ui: Arc<dyn UiSurfacePort>,
    interval: Duration,
}

impl ProgressPoller {
    pub fn new(api: Arc<dyn TranscriptionApiPort>, ui: Arc<dyn UiSurfacePort>) -> Self {
        Self {
            api,
            ui,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub async fn handle(&self, cmd: PollProgressCommand) -> Result<PollReport, ApplicationError> {
        let job_id = cmd.job_id;
        let mut polls = 0u32;

        loop {
            polls += 1;
            tracing::debug!(job_id = %job_id, poll = polls, "Polling progress");

            let snapshot = match self.api.fetch_progress(&job_id).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    // 任何失败都结束轮询链，不重试
                    tracing::error!(job_id = %job_id, poll = polls, error = %e, "Failed to load progress");
                    return Err(ApplicationError::from_progress(e));
                }
            };

            self.render(&snapshot);

            if snapshot.complete {
                self.ui.set_visible(UiElement::Spinner, false);
                self.ui.set_visible(UiElement::CopyButton, true);

                tracing::info!(
                    job_id = %job_id,
                    polls = polls,
                    total_chunks = snapshot.total_chunks,
                    transcript_len = snapshot.transcript.len(),
                    "Transcription complete"
                );

                return Ok(PollReport {
                    job_id,
                    snapshot,
                    polls,
                });
            }

            tokio::time::sleep(self.interval).await;
        }
    }

    fn render(&self, snapshot: &ProgressSnapshot) {
        self.ui.set_progress_width(snapshot.progress);
        self.ui.set_status_text(&snapshot.status_line());
        self.ui.set_transcript(&snapshot.transcript);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::test_support::*;
    use crate::application::ports::JobApiError;
    use crate::domain::JobId;
    use crate::infrastructure::memory::InMemoryUiSurface;

    fn poller(api: Arc<ScriptedApi>, ui: Arc<InMemoryUiSurface>) -> ProgressPoller {
        ProgressPoller::new(api, ui)
    }

    fn cmd(id: &str) -> PollProgressCommand {
        PollProgressCommand {
            job_id: JobId::new(id).unwrap(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_schedules_exactly_one_poll_after_interval() {
        let api = Arc::new(
            ScriptedApi::new()
                .then_progress(Ok(snapshot(20.0, 1, "a", false)))
                .then_progress(Ok(snapshot(40.0, 2, "a b", false)))
                .then_progress(Ok(snapshot(100.0, 5, "a b c", true))),
        );
        let ui = Arc::new(InMemoryUiSurface::new());

        let report = poller(api.clone(), ui.clone()).handle(cmd("job-1")).await.unwrap();

        assert_eq!(report.polls, 3);
        assert_eq!(api.progress_calls(), 3);
        assert_eq!(api.max_in_flight(), 1);

        let times = api.call_times();
        assert_eq!(times[1] - times[0], Duration::from_millis(1000));
        assert_eq!(times[2] - times[1], Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_stops_and_swaps_spinner_for_copy_button() {
        let api = Arc::new(ScriptedApi::new().then_progress(Ok(snapshot(100.0, 5, "done", true))));
        let ui = Arc::new(InMemoryUiSurface::new());
        ui.set_visible(UiElement::Spinner, true);

        let report = poller(api.clone(), ui.clone()).handle(cmd("job-1")).await.unwrap();

        assert_eq!(report.polls, 1);
        assert_eq!(api.progress_calls(), 1);
        let state = ui.snapshot();
        assert!(!state.spinner_visible);
        assert!(state.copy_button_visible);
        assert_eq!(state.transcript, "done");
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_200_terminates_without_ui_change() {
        let api = Arc::new(
            ScriptedApi::new()
                .then_progress(Ok(snapshot(40.0, 2, "hello", false)))
                .then_progress(Err(JobApiError::UnexpectedStatus {
                    status: 500,
                    body: "boom".to_string(),
                })),
        );
        let ui = Arc::new(InMemoryUiSurface::new());
        ui.set_visible(UiElement::Spinner, true);

        let err = poller(api.clone(), ui.clone()).handle(cmd("job-1")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ProgressRejected(500)));
        assert_eq!(api.progress_calls(), 2);
        let state = ui.snapshot();
        assert!(state.spinner_visible);
        assert!(!state.copy_button_visible);
        assert_eq!(state.transcript, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_reported_job_error_terminates() {
        let api = Arc::new(
            ScriptedApi::new().then_progress(Err(JobApiError::JobFailed("Job not found".to_string()))),
        );
        let ui = Arc::new(InMemoryUiSurface::new());

        let err = poller(api.clone(), ui).handle(cmd("missing")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::JobFailed(ref m) if m == "Job not found"));
        assert_eq!(api.progress_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_text_reflects_latest_snapshot_only() {
        let mut second = snapshot(80.0, 4, "one two", true);
        second.elapsed_time = 30.5;
        second.remaining_time = 0.2;
        let api = Arc::new(
            ScriptedApi::new()
                .then_progress(Ok(snapshot(40.0, 2, "one", false)))
                .then_progress(Ok(second)),
        );
        let ui = Arc::new(InMemoryUiSurface::new());

        poller(api, ui.clone()).handle(cmd("job-1")).await.unwrap();

        let state = ui.snapshot();
        assert_eq!(
            state.status_text,
            "Processing chunk 4 of 5 (31s elapsed, 0s remaining)"
        );
        assert_eq!(state.progress_width, 80.0);
        assert_eq!(state.transcript, "one two");
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_width_is_the_reported_percentage() {
        let api = Arc::new(ScriptedApi::new().then_progress(Ok(snapshot(140.0, 5, "", true))));
        let ui = Arc::new(InMemoryUiSurface::new());

        poller(api, ui.clone()).handle(cmd("job-1")).await.unwrap();

        assert_eq!(ui.snapshot().progress_width, 140.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_interval() {
        let api = Arc::new(
            ScriptedApi::new()
                .then_progress(Ok(snapshot(50.0, 1, "", false)))
                .then_progress(Ok(snapshot(100.0, 2, "", true))),
        );
        let ui = Arc::new(InMemoryUiSurface::new());

        poller(api.clone(), ui)
            .with_interval(Duration::from_millis(250))
            .handle(cmd("job-1"))
            .await
            .unwrap();

        let times = api.call_times();
        assert_eq!(times[1] - times[0], Duration::from_millis(250));
    }
}
