//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（scribo.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use reqwest::Url;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["scribo", "scribo.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SCRIBO_`，层级分隔符 `__`）
/// 2. 配置文件（scribo.toml 或 scribo.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SCRIBO_SERVER__BASE_URL=http://transcriber:5000`
/// - `SCRIBO_POLL__INTERVAL_MS=500`
/// - `SCRIBO_OUTPUT__SAVE_DIR=transcripts`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.base_url", "http://localhost:5000")?
        .set_default("server.connect_timeout_secs", 10)?
        .set_default("poll.interval_ms", 1000)?
        .set_default("upload.file_field", "file")?
        .set_default("ui.confirm_alerts", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: SCRIBO_
    // 层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("SCRIBO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server base URL cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.server.base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "Invalid server base URL {}: {}",
            config.server.base_url, e
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "Server base URL must be http or https: {}",
            config.server.base_url
        )));
    }

    if config.poll.interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "Poll interval cannot be 0".to_string(),
        ));
    }

    if config.upload.file_field.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Upload file field cannot be empty".to_string(),
        ));
    }

    if let Some(command) = &config.clipboard.command {
        if command.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Clipboard command cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// 以 TOML 形式输出生效的配置
pub fn render_config(config: &AppConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Client Configuration ===");
    tracing::debug!("Server: {}", config.server.base_url);
    tracing::debug!("Connect Timeout: {}s", config.server.connect_timeout_secs);
    tracing::debug!("Poll Interval: {}ms", config.poll.interval_ms);
    tracing::debug!("Upload Field: {}", config.upload.file_field);
    tracing::debug!(
        "Clipboard Command: {}",
        config.clipboard.command.as_deref().unwrap_or("(auto)")
    );
    if let Some(dir) = &config.output.save_dir {
        tracing::debug!("Save Directory: {:?}", dir);
    }
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("============================");
}
