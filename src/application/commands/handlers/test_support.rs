//! 测试用的脚本化转写服务、剪贴板与提示

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

use crate::application::ports::{
    ClipboardError, ClipboardPort, JobApiError, NotifierPort, TranscriptionApiPort, UploadForm,
};
use crate::domain::{JobId, ProgressSnapshot};

/// 服务端调用记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Submit(String),
    Progress(String),
}

/// 按预设脚本回复的转写服务
pub struct ScriptedApi {
    submit_reply: Mutex<Option<Result<JobId, JobApiError>>>,
    progress_replies: Mutex<VecDeque<Result<ProgressSnapshot, JobApiError>>>,
    calls: Mutex<Vec<(ApiCall, Instant)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            submit_reply: Mutex::new(None),
            progress_replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn accept(self, job_id: &str) -> Self {
        *self.submit_reply.lock().unwrap() = Some(Ok(JobId::new(job_id).unwrap()));
        self
    }

    pub fn reject(self, status: u16) -> Self {
        *self.submit_reply.lock().unwrap() = Some(Err(JobApiError::UnexpectedStatus {
            status,
            body: String::new(),
        }));
        self
    }

    pub fn then_progress(self, reply: Result<ProgressSnapshot, JobApiError>) -> Self {
        self.progress_replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub fn progress_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::Progress(_)))
            .count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push((call, Instant::now()));
    }
}

#[async_trait]
impl TranscriptionApiPort for ScriptedApi {
    async fn submit(&self, form: &UploadForm) -> Result<JobId, JobApiError> {
        self.record(ApiCall::Submit(form.file_name()));
        self.submit_reply
            .lock()
            .unwrap()
            .take()
            .expect("unexpected submit")
    }

    async fn fetch_progress(&self, job_id: &JobId) -> Result<ProgressSnapshot, JobApiError> {
        self.record(ApiCall::Progress(job_id.to_string()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let reply = self
            .progress_replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected poll");
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }
}

pub fn snapshot(progress: f64, processed: u32, transcript: &str, complete: bool) -> ProgressSnapshot {
    ProgressSnapshot {
        progress,
        processed_chunks: processed,
        total_chunks: 5,
        elapsed_time: 12.4,
        remaining_time: 18.1,
        transcript: transcript.to_string(),
        complete,
    }
}

/// 记录写入内容的剪贴板
#[derive(Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    pub written: Mutex<Vec<String>>,
}

#[async_trait]
impl ClipboardPort for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::PermissionDenied("denied".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// 记录提示消息
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

#[async_trait]
impl NotifierPort for RecordingNotifier {
    async fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
