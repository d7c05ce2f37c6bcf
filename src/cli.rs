//! 命令行参数
//!
//! 命令行参数覆盖配置文件与环境变量中的同名设置

use clap::Parser;
use std::path::PathBuf;

use crate::application::ports::UploadForm;
use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(author, version, about = "Upload audio for transcription and follow its progress", long_about = None)]
pub struct Cli {
    /// Audio file to transcribe
    #[arg(required_unless_present = "print_config")]
    pub file: Option<PathBuf>,

    /// Transcription server base URL (e.g. http://localhost:5000)
    #[arg(long, short = 's')]
    pub server: Option<String>,

    /// Extra form field sent with the upload, as KEY=VALUE (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Form field name for the file part
    #[arg(long)]
    pub file_field: Option<String>,

    /// Delay between progress polls, in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Copy the finished transcript to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save the finished transcript into this directory
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulate the transcription server locally instead of uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// 用命令行参数覆盖配置
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }
        if let Some(field) = &self.file_field {
            config.upload.file_field = field.clone();
        }
        if let Some(interval) = self.interval_ms {
            config.poll.interval_ms = interval;
        }
        if let Some(dir) = &self.save_dir {
            config.output.save_dir = Some(dir.clone());
        }
    }

    /// 构建上传表单，未给出文件时返回 None
    pub fn upload_form(&self, config: &AppConfig) -> Option<UploadForm> {
        let file = self.file.as_ref()?;
        let form = self.fields.iter().fold(
            UploadForm::new(file).with_file_field(config.upload.file_field.clone()),
            |form, (key, value)| form.with_field(key.clone(), value.clone()),
        );
        Some(form)
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{}`", raw)),
    }
}
