//! Job Context - 进度快照
//!
//! 每次轮询 `/progress/{job_id}` 得到一份快照，整体替换上一份，不做累积。

use serde::{Deserialize, Serialize};

/// 进度快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// 完成百分比 (0 - 100)
    pub progress: f64,
    /// 已处理分片数
    pub processed_chunks: u32,
    /// 分片总数
    pub total_chunks: u32,
    /// 已用时间（秒）
    pub elapsed_time: f64,
    /// 预计剩余时间（秒）
    pub remaining_time: f64,
    /// 目前为止的完整转写文本
    pub transcript: String,
    /// 是否已完成
    pub complete: bool,
}

impl ProgressSnapshot {
    /// 状态栏文本
    ///
    /// 例如 `Processing chunk 2 of 5 (12s elapsed, 18s remaining)`
    pub fn status_line(&self) -> String {
        format!(
            "Processing chunk {} of {} ({}s elapsed, {}s remaining)",
            self.processed_chunks,
            self.total_chunks,
            round_half_up(self.elapsed_time),
            round_half_up(self.remaining_time)
        )
    }
}

/// 四舍五入到整数，.5 向正无穷方向取整
///
/// 非有限值按 0 处理。
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}
