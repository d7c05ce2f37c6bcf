//! Fake Transcription Client - 用于演示与测试的转写服务
//!
//! 不发出网络请求：每次查询进度推进一个分片，按服务端的方式估算剩余时间

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::time::Instant;

use crate::application::ports::{JobApiError, TranscriptionApiPort, UploadForm};
use crate::domain::{JobId, ProgressSnapshot};

/// Fake Transcription Client 配置
#[derive(Debug, Clone)]
pub struct FakeTranscriptionClientConfig {
    /// 模拟的分片总数
    pub total_chunks: u32,
}

impl Default for FakeTranscriptionClientConfig {
    fn default() -> Self {
        Self { total_chunks: 5 }
    }
}

struct FakeJob {
    source_name: String,
    processed: u32,
    started_at: Instant,
    transcript: String,
}

/// Fake Transcription Client
pub struct FakeTranscriptionClient {
    config: FakeTranscriptionClientConfig,
    jobs: Mutex<HashMap<JobId, FakeJob>>,
}

impl FakeTranscriptionClient {
    pub fn new(config: FakeTranscriptionClientConfig) -> Self {
        tracing::info!(
            total_chunks = config.total_chunks,
            "FakeTranscriptionClient initialized"
        );
        Self {
            config,
            jobs: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeTranscriptionClientConfig::default())
    }
}

#[async_trait]
impl TranscriptionApiPort for FakeTranscriptionClient {
    async fn submit(&self, form: &UploadForm) -> Result<JobId, JobApiError> {
        if tokio::fs::metadata(&form.file_path).await.is_err() {
            return Err(JobApiError::IoError(format!(
                "{}: file not found",
                form.file_path.display()
            )));
        }

        let job_id = JobId::new(format!("fake-{}", uuid::Uuid::new_v4()))
            .map_err(|e| JobApiError::InvalidResponse(e.to_string()))?;
        let job = FakeJob {
            source_name: form.file_name(),
            processed: 0,
            started_at: Instant::now(),
            transcript: String::new(),
        };

        self.jobs
            .lock()
            .map_err(|_| JobApiError::NetworkError("fake job table poisoned".to_string()))?
            .insert(job_id.clone(), job);

        tracing::debug!(job_id = %job_id, "FakeTranscriptionClient: job accepted");
        Ok(job_id)
    }

    async fn fetch_progress(&self, job_id: &JobId) -> Result<ProgressSnapshot, JobApiError> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| JobApiError::NetworkError("fake job table poisoned".to_string()))?;
        let job = jobs
            .get_mut(job_id)
            .ok_or_else(|| JobApiError::JobFailed("Job not found".to_string()))?;

        let total = self.config.total_chunks.max(1);
        if job.processed < total {
            job.processed += 1;
            job.transcript.push_str(&format!(
                "[{} chunk {}]\n",
                job.source_name, job.processed
            ));
        }

        let elapsed = job.started_at.elapsed().as_secs_f64();
        let remaining = elapsed * f64::from(total - job.processed) / f64::from(job.processed);

        Ok(ProgressSnapshot {
            progress: f64::from(job.processed) / f64::from(total) * 100.0,
            processed_chunks: job.processed,
            total_chunks: total,
            elapsed_time: elapsed,
            remaining_time: remaining,
            transcript: job.transcript.clone(),
            complete: job.processed == total,
        })
    }
}
