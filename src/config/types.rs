//! Configuration Types
//!
//! 定义所有配置结构体

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 转写服务配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 轮询配置
    #[serde(default)]
    pub poll: PollConfig,

    /// 上传表单配置
    #[serde(default)]
    pub upload: UploadConfig,

    /// 剪贴板配置
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// 界面配置
    #[serde(default)]
    pub ui: UiConfig,

    /// 结果导出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 转写服务配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 服务基础 URL，上传到 `{base_url}/`，轮询 `{base_url}/progress/{job_id}`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 建立连接超时时间（秒），0 表示不限制
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// 轮询配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// 两次轮询之间的间隔（毫秒）
    #[serde(default = "default_poll_interval")]
    pub interval_ms: u64,
}

fn default_poll_interval() -> u64 {
    1000
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval(),
        }
    }
}

/// 上传表单配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// 文件字段名
    #[serde(default = "default_file_field")]
    pub file_field: String,
}

fn default_file_field() -> String {
    "file".to_string()
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            file_field: default_file_field(),
        }
    }
}

/// 剪贴板配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClipboardConfig {
    /// 剪贴板命令，如 `xclip -selection clipboard`
    /// 未设置时按平台自动选择
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// 界面配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// 提示消息是否等待回车确认
    ///
    /// stdin 关闭时读取立即返回，非交互运行不会卡住。
    #[serde(default = "default_confirm_alerts")]
    pub confirm_alerts: bool,
}

fn default_confirm_alerts() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_alerts: default_confirm_alerts(),
        }
    }
}

/// 结果导出配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// 转写完成后保存文本的目录，未设置则不保存
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
