//! Scribo - 上传音频并跟踪转写进度

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use scribo::application::{
    CopyTranscriptCommand, CopyTranscriptHandler, ExportTranscriptCommand,
    ExportTranscriptHandler, ProgressPoller, SubmitUploadCommand, SubmitUploadHandler,
    TranscriptionApiPort,
};
use scribo::cli::Cli;
use scribo::config::{
    load_config, load_config_from_path, print_config, render_config, validate_config, AppConfig,
    LogConfig,
};
use scribo::infrastructure::adapters::{
    CommandClipboard, FakeTranscriptionClient, HttpTranscriptionClient,
    HttpTranscriptionClientConfig, TranscriptFileStore,
};
use scribo::infrastructure::{TerminalNotifier, TerminalUi};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},scribo={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn build_api(cli: &Cli, config: &AppConfig) -> anyhow::Result<Arc<dyn TranscriptionApiPort>> {
    if cli.dry_run {
        tracing::warn!("Dry run: simulating the transcription server locally");
        return Ok(Arc::new(FakeTranscriptionClient::with_defaults()));
    }

    let client_config = HttpTranscriptionClientConfig::new(&config.server.base_url)
        .with_connect_timeout(config.server.connect_timeout_secs);
    Ok(Arc::new(HttpTranscriptionClient::new(client_config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(Some(path.as_path())),
        None => load_config(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    cli.apply(&mut config);
    validate_config(&config)?;

    if cli.print_config {
        print!("{}", render_config(&config)?);
        return Ok(());
    }

    init_tracing(&config.log);
    print_config(&config);

    let form = cli
        .upload_form(&config)
        .ok_or_else(|| anyhow::anyhow!("No input file given"))?;

    let api = build_api(&cli, &config)?;
    let ui = Arc::new(TerminalUi::new());

    let poller = ProgressPoller::new(api.clone(), ui.clone())
        .with_interval(Duration::from_millis(config.poll.interval_ms));
    let submit = SubmitUploadHandler::new(api, ui.clone(), poller);

    let result = tokio::select! {
        result = submit.handle(SubmitUploadCommand { form }) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, stopping progress polling");
            anyhow::bail!("interrupted");
        }
    };

    if let Some(dir) = &config.output.save_dir {
        let export = ExportTranscriptHandler::new(Arc::new(TranscriptFileStore::new(dir)));
        let cmd = ExportTranscriptCommand {
            transcript: result.report.snapshot.transcript.clone(),
            source_name: result.source_name.clone(),
        };
        if let Some(saved) = export.save_or_log(cmd).await {
            eprintln!("Transcript saved to {}", saved.path.display());
        }
    }

    if cli.copy {
        let clipboard = config
            .clipboard
            .command
            .as_deref()
            .and_then(CommandClipboard::parse)
            .unwrap_or_else(CommandClipboard::detect);
        let notifier = Arc::new(TerminalNotifier::from_config(&config.ui));
        let copy = CopyTranscriptHandler::new(ui, Arc::new(clipboard), notifier);

        // 失败已提示用户，不影响退出状态
        if let Err(e) = copy.handle(CopyTranscriptCommand).await {
            tracing::debug!(error = %e, "Copy failed");
        }
    }

    tracing::info!(
        job_id = %result.report.job_id,
        polls = result.report.polls,
        "Done"
    );

    Ok(())
}
