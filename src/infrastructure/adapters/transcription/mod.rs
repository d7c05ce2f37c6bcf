//! Transcription Adapter - 转写服务客户端实现

mod fake_transcription_client;
mod http_transcription_client;

pub use fake_transcription_client::{FakeTranscriptionClient, FakeTranscriptionClientConfig};
pub use http_transcription_client::*;
