//! UI Surface Port - 界面状态抽象
//!
//! 页面上被读写的元素集中到一个显式的上下文对象里，
//! 由各个 handler 通过该端口访问，而不是各自查找全局元素。

/// 可显示/隐藏的界面元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElement {
    /// 进度条容器
    ProgressBar,
    /// 转写中指示器
    Spinner,
    /// 复制按钮
    CopyButton,
}

/// UI Surface Port
///
/// 所有方法只在驱动任务中调用。
pub trait UiSurfacePort: Send + Sync {
    /// 显示或隐藏元素
    fn set_visible(&self, element: UiElement, visible: bool);

    /// 设置进度条填充宽度（百分比）
    fn set_progress_width(&self, percent: f64);

    /// 设置状态文本
    fn set_status_text(&self, text: &str);

    /// 整体替换转写文本
    fn set_transcript(&self, text: &str);

    /// 读取当前显示的转写文本
    fn transcript(&self) -> String;
}
