//! Command Clipboard - 通过系统剪贴板程序写入文本
//!
//! 文本经由子进程的标准输入写入，例如 `pbcopy`、`wl-copy`、`xclip`、`clip`

use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{ClipboardError, ClipboardPort};

/// 剪贴板命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// 从命令行字符串解析，如 `xclip -selection clipboard`
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// 按当前平台选择剪贴板程序
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl ClipboardPort for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ClipboardError::Unavailable(format!("{} not found", self.program))
                }
                ErrorKind::PermissionDenied => {
                    ClipboardError::PermissionDenied(format!("{}: {}", self.program, e))
                }
                _ => ClipboardError::CommandFailed(format!("{}: {}", self.program, e)),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;
            // 关闭 stdin，程序才会结束读取
            drop(stdin);
        }

        // xclip / wl-copy 会留下后台进程持有选区，只等待前台进程退出
        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::CommandFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::CommandFailed(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        tracing::debug!(program = %self.program, len = text.len(), "Clipboard written");
        Ok(())
    }
}
