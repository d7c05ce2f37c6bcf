//! HTTP Transcription Client - 调用外部转写 HTTP 服务
//!
//! 实现 TranscriptionApiPort trait
//!
//! 外部转写 API:
//! POST {base_url}/                    multipart 表单 → 202 {"job_id": "..."}
//! GET  {base_url}/progress/{job_id}   → 200 进度快照 JSON，或 200 {"error": "..."}

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tokio_util::io::ReaderStream;

use crate::application::ports::{JobApiError, TranscriptionApiPort, UploadForm};
use crate::domain::{JobId, ProgressSnapshot};

/// 上传响应体
#[derive(Debug, Deserialize)]
struct SubmitHttpResponse {
    job_id: String,
}

/// 进度响应体
///
/// 服务端对未知任务或转写失败的任务同样返回 200，只是带 `error` 字段。
/// 转写失败时 `error` 与完整快照字段并存，`Failed` 必须排在前面。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProgressHttpResponse {
    Failed { error: String },
    Snapshot(ProgressSnapshot),
}

/// HTTP 转写客户端配置
#[derive(Debug, Clone)]
pub struct HttpTranscriptionClientConfig {
    /// 转写服务基础 URL
    pub base_url: String,
    /// 建立连接超时时间（秒），0 表示不限制
    ///
    /// 上传与轮询请求本身不设超时。
    pub connect_timeout_secs: u64,
}

impl Default for HttpTranscriptionClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl HttpTranscriptionClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }
}

/// HTTP 转写客户端
pub struct HttpTranscriptionClient {
    client: Client,
    base_url: Url,
}

impl HttpTranscriptionClient {
    /// 创建新的 HTTP 转写客户端
    pub fn new(config: HttpTranscriptionClientConfig) -> Result<Self, JobApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| JobApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(JobApiError::InvalidUrl(config.base_url));
        }

        let mut builder = Client::builder();
        if config.connect_timeout_secs > 0 {
            builder = builder.connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| JobApiError::NetworkError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// 获取上传 URL（基础路径本身，以 `/` 结尾）
    fn submit_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    /// 获取进度 URL，job_id 作为单独的路径段编码
    fn progress_url(&self, job_id: &JobId) -> Result<Url, JobApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| JobApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("progress")
            .push(job_id.as_str());
        Ok(url)
    }

    async fn build_form(&self, form: &UploadForm) -> Result<Form, JobApiError> {
        let file = tokio::fs::File::open(&form.file_path).await.map_err(|e| {
            JobApiError::IoError(format!("{}: {}", form.file_path.display(), e))
        })?;
        let len = file
            .metadata()
            .await
            .map_err(|e| JobApiError::IoError(e.to_string()))?
            .len();

        let mime = mime_guess::from_path(&form.file_path).first_or_octet_stream();
        let part = Part::stream_with_length(Body::wrap_stream(ReaderStream::new(file)), len)
            .file_name(form.file_name())
            .mime_str(mime.essence_str())
            .map_err(|e| JobApiError::IoError(format!("invalid MIME type: {}", e)))?;

        let mut multipart = Form::new();
        for (key, value) in &form.fields {
            multipart = multipart.text(key.clone(), value.clone());
        }
        Ok(multipart.part(form.file_field.clone(), part))
    }
}

fn map_send_error(e: reqwest::Error) -> JobApiError {
    if e.is_connect() {
        JobApiError::NetworkError(format!("Cannot connect to transcription service: {}", e))
    } else {
        JobApiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl TranscriptionApiPort for HttpTranscriptionClient {
    async fn submit(&self, form: &UploadForm) -> Result<JobId, JobApiError> {
        let url = self.submit_url();
        let multipart = self.build_form(form).await?;

        tracing::debug!(
            url = %url,
            file = %form.file_name(),
            "Sending upload request"
        );

        let response = self
            .client
            .post(url)
            .multipart(multipart)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status != StatusCode::ACCEPTED {
            let body = response.text().await.unwrap_or_default();
            return Err(JobApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: SubmitHttpResponse = response
            .json()
            .await
            .map_err(|e| JobApiError::InvalidResponse(format!("Invalid upload response: {}", e)))?;

        JobId::new(body.job_id).map_err(|e| JobApiError::InvalidResponse(e.to_string()))
    }

    async fn fetch_progress(&self, job_id: &JobId) -> Result<ProgressSnapshot, JobApiError> {
        let url = self.progress_url(job_id)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(JobApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| JobApiError::NetworkError(e.to_string()))?;

        match serde_json::from_slice::<ProgressHttpResponse>(&bytes) {
            Ok(ProgressHttpResponse::Snapshot(snapshot)) => {
                tracing::debug!(
                    job_id = %job_id,
                    progress = snapshot.progress,
                    processed = snapshot.processed_chunks,
                    total = snapshot.total_chunks,
                    complete = snapshot.complete,
                    "Progress received"
                );
                Ok(snapshot)
            }
            Ok(ProgressHttpResponse::Failed { error }) => Err(JobApiError::JobFailed(error)),
            Err(e) => Err(JobApiError::InvalidResponse(format!(
                "Invalid progress response: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpTranscriptionClient {
        HttpTranscriptionClient::new(HttpTranscriptionClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpTranscriptionClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTranscriptionClientConfig::new("http://example.com:9000").with_connect_timeout(0);
        assert_eq!(config.base_url, "http://example.com:9000");
        assert_eq!(config.connect_timeout_secs, 0);
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpTranscriptionClient::new(HttpTranscriptionClientConfig::new("not a url"));
        assert!(matches!(result, Err(JobApiError::InvalidUrl(_))));
        let result = HttpTranscriptionClient::new(HttpTranscriptionClientConfig::new("mailto:a@b.c"));
        assert!(matches!(result, Err(JobApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_urls_at_root() {
        let c = client("http://localhost:5000");
        assert_eq!(c.submit_url().as_str(), "http://localhost:5000/");
        let id = JobId::new("abc123").unwrap();
        assert_eq!(
            c.progress_url(&id).unwrap().as_str(),
            "http://localhost:5000/progress/abc123"
        );
    }

    #[test]
    fn test_urls_under_prefix() {
        let c = client("http://host/app");
        assert_eq!(c.submit_url().as_str(), "http://host/app/");
        let id = JobId::new("abc123").unwrap();
        assert_eq!(
            c.progress_url(&id).unwrap().as_str(),
            "http://host/app/progress/abc123"
        );
    }

    #[test]
    fn test_job_id_is_a_single_path_segment() {
        let c = client("http://localhost:5000/");
        let id = JobId::new("a/b c").unwrap();
        assert_eq!(
            c.progress_url(&id).unwrap().as_str(),
            "http://localhost:5000/progress/a%2Fb%20c"
        );
    }

    #[test]
    fn test_progress_body_with_error_is_failure() {
        let body: ProgressHttpResponse =
            serde_json::from_str(r#"{"error": "Job not found"}"#).unwrap();
        assert!(matches!(body, ProgressHttpResponse::Failed { ref error } if error == "Job not found"));
    }

    #[test]
    fn test_snapshot_with_error_field_is_failure() {
        let body: ProgressHttpResponse = serde_json::from_str(
            r#"{
                "progress": 40.0,
                "processed_chunks": 2,
                "total_chunks": 5,
                "elapsed_time": 12.4,
                "remaining_time": 18.1,
                "transcript": "hello",
                "complete": false,
                "error": "CUDA out of memory"
            }"#,
        )
        .unwrap();
        assert!(matches!(body, ProgressHttpResponse::Failed { ref error } if error == "CUDA out of memory"));
    }
}
