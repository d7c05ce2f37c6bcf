//! Terminal UI - 在终端渲染界面状态
//!
//! 状态保存在 InMemoryUiSurface 中；每次变更后重绘 stderr 上的进度行，
//! 转写文本新增的部分写到 stdout。

use std::io::Write;
use std::sync::Mutex;

use crate::application::ports::{UiElement, UiSurfacePort};
use crate::infrastructure::memory::{InMemoryUiSurface, UiState};

/// 进度条字符宽度
const BAR_WIDTH: usize = 30;

const SPINNER_FRAMES: &[char] = &['|', '/', '-', '\\'];

/// 渲染一行进度
pub fn progress_line(state: &UiState, frame: usize) -> String {
    let ratio = if state.progress_width.is_finite() {
        (state.progress_width / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let marker = if state.spinner_visible {
        SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
    } else if state.copy_button_visible {
        '✓'
    } else {
        ' '
    };

    format!(
        "{} [{}{}] {:>3.0}% {}",
        marker,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        ratio * 100.0,
        state.status_text
    )
}

#[derive(Default)]
struct RenderState {
    frame: usize,
    /// 已写到 stdout 的转写文本
    printed: String,
}

/// 终端界面
pub struct TerminalUi {
    state: InMemoryUiSurface,
    render: Mutex<RenderState>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self {
            state: InMemoryUiSurface::new(),
            render: Mutex::new(RenderState::default()),
        }
    }

    /// 当前状态的拷贝
    pub fn snapshot(&self) -> UiState {
        self.state.snapshot()
    }

    fn redraw(&self) {
        let state = self.state.snapshot();
        if !state.progress_bar_visible {
            return;
        }
        let Ok(mut render) = self.render.lock() else {
            return;
        };
        render.frame = render.frame.wrapping_add(1);

        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r\x1b[2K{}", progress_line(&state, render.frame));
        if state.copy_button_visible {
            let _ = writeln!(err);
        }
        let _ = err.flush();
    }

    fn stream_transcript(&self, text: &str) {
        let Ok(mut render) = self.render.lock() else {
            return;
        };
        let mut out = std::io::stdout().lock();
        if let Some(suffix) = text.strip_prefix(render.printed.as_str()) {
            let _ = write!(out, "{}", suffix);
        } else {
            // 服务端整体替换了文本，重新输出
            let _ = write!(out, "\n{}", text);
        }
        let _ = out.flush();
        render.printed = text.to_string();
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSurfacePort for TerminalUi {
    fn set_visible(&self, element: UiElement, visible: bool) {
        self.state.set_visible(element, visible);
        self.redraw();
    }

    fn set_progress_width(&self, percent: f64) {
        self.state.set_progress_width(percent);
    }

    fn set_status_text(&self, text: &str) {
        self.state.set_status_text(text);
        self.redraw();
    }

    fn set_transcript(&self, text: &str) {
        self.state.set_transcript(text);
        self.stream_transcript(text);
    }

    fn transcript(&self) -> String {
        self.state.transcript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(width: f64) -> UiState {
        UiState {
            progress_bar_visible: true,
            spinner_visible: true,
            progress_width: width,
            status_text: "Processing chunk 2 of 5 (12s elapsed, 18s remaining)".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_line_fill() {
        let line = progress_line(&state(40.0), 0);
        let filled = "#".repeat(12);
        let empty = "-".repeat(18);
        assert_eq!(
            line,
            format!(
                "| [{}{}]  40% Processing chunk 2 of 5 (12s elapsed, 18s remaining)",
                filled, empty
            )
        );
    }

    #[test]
    fn test_progress_line_clamps_width() {
        let line = progress_line(&state(250.0), 1);
        assert!(line.starts_with(&format!("/ [{}]", "#".repeat(BAR_WIDTH))));
        assert!(line.contains("100%"));
    }

    #[test]
    fn test_progress_line_treats_non_finite_as_empty() {
        let line = progress_line(&state(f64::NAN), 0);
        assert!(line.starts_with(&format!("| [{}]   0%", "-".repeat(BAR_WIDTH))));
    }

    #[test]
    fn test_progress_line_marks_completion() {
        let mut s = state(100.0);
        s.spinner_visible = false;
        s.copy_button_visible = true;
        assert!(progress_line(&s, 0).starts_with('✓'));
    }

    #[test]
    fn test_terminal_ui_keeps_state() {
        let ui = TerminalUi::new();
        ui.set_transcript("hello");
        ui.set_transcript("hello world");
        assert_eq!(ui.transcript(), "hello world");
        ui.set_visible(UiElement::CopyButton, true);
        assert!(ui.snapshot().copy_button_visible);
    }
}
