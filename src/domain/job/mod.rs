//! Job Context - 转写任务限界上下文
//!
//! 职责:
//! - 服务端分配的 Job 标识
//! - 每次轮询得到的进度快照及其展示文本

mod errors;
mod snapshot;
mod value_objects;

pub use errors::JobError;
pub use snapshot::{round_half_up, ProgressSnapshot};
pub use value_objects::JobId;
