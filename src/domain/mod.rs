//! Domain Layer - 领域层
//!
//! Job Context: 转写任务标识与进度快照

pub mod job;

pub use job::{JobError, JobId, ProgressSnapshot};
