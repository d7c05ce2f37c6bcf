//! In-Memory UI State
//!
//! 页面元素状态的单一上下文对象

use std::sync::RwLock;

use crate::application::ports::{UiElement, UiSurfacePort};

/// 界面状态
///
/// 初始时进度条、指示器与复制按钮均隐藏。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub progress_bar_visible: bool,
    pub spinner_visible: bool,
    pub copy_button_visible: bool,
    /// 进度条填充宽度（百分比）
    pub progress_width: f64,
    pub status_text: String,
    pub transcript: String,
}

impl UiState {
    pub fn is_visible(&self, element: UiElement) -> bool {
        match element {
            UiElement::ProgressBar => self.progress_bar_visible,
            UiElement::Spinner => self.spinner_visible,
            UiElement::CopyButton => self.copy_button_visible,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: UiState,
    status_history: Vec<String>,
}

/// 内存界面状态
pub struct InMemoryUiSurface {
    inner: RwLock<Inner>,
}

impl InMemoryUiSurface {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// 当前状态的拷贝
    pub fn snapshot(&self) -> UiState {
        self.read(|inner| inner.state.clone())
    }

    /// 依次设置过的状态文本
    pub fn status_history(&self) -> Vec<String> {
        self.read(|inner| inner.status_history.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write(&self, f: impl FnOnce(&mut Inner)) {
        match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl Default for InMemoryUiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSurfacePort for InMemoryUiSurface {
    fn set_visible(&self, element: UiElement, visible: bool) {
        self.write(|inner| match element {
            UiElement::ProgressBar => inner.state.progress_bar_visible = visible,
            UiElement::Spinner => inner.state.spinner_visible = visible,
            UiElement::CopyButton => inner.state.copy_button_visible = visible,
        });
        tracing::trace!(element = ?element, visible, "UI element visibility changed");
    }

    fn set_progress_width(&self, percent: f64) {
        self.write(|inner| inner.state.progress_width = percent);
    }

    fn set_status_text(&self, text: &str) {
        self.write(|inner| {
            inner.state.status_text = text.to_string();
            inner.status_history.push(text.to_string());
        });
    }

    fn set_transcript(&self, text: &str) {
        self.write(|inner| inner.state.transcript = text.to_string());
    }

    fn transcript(&self) -> String {
        self.read(|inner| inner.state.transcript.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_hidden() {
        let ui = InMemoryUiSurface::new();
        let state = ui.snapshot();
        assert!(!state.is_visible(UiElement::ProgressBar));
        assert!(!state.is_visible(UiElement::Spinner));
        assert!(!state.is_visible(UiElement::CopyButton));
        assert_eq!(state.progress_width, 0.0);
    }

    #[test]
    fn test_transcript_is_replaced_not_appended() {
        let ui = InMemoryUiSurface::new();
        ui.set_transcript("hello");
        ui.set_transcript("hello world");
        assert_eq!(ui.transcript(), "hello world");
    }

    #[test]
    fn test_status_history_keeps_order() {
        let ui = InMemoryUiSurface::new();
        ui.set_status_text("first");
        ui.set_status_text("second");
        assert_eq!(ui.snapshot().status_text, "second");
        assert_eq!(ui.status_history(), vec!["first", "second"]);
    }
}
