//! Scribo - 音频转写上传与进度跟踪客户端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Job Context: 任务标识与进度快照
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TranscriptionApi, UiSurface, Clipboard, Notifier, TranscriptStore）
//! - Commands: 提交上传、轮询进度、复制转写、导出转写
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 转写客户端, 剪贴板命令, 转写文件存储
//! - Memory: 界面状态
//! - Terminal: 终端渲染与提示

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
