//! Storage Adapter - 转写结果文件存储

mod transcript_file_store;

pub use transcript_file_store::TranscriptFileStore;
