//! Terminal Notifier - 终端上的阻塞提示

use async_trait::async_trait;

use crate::application::ports::NotifierPort;
use crate::config::UiConfig;

/// 终端提示
///
/// `confirm` 为 true 时等待用户按回车后才返回。
pub struct TerminalNotifier {
    confirm: bool,
}

impl TerminalNotifier {
    pub fn new(confirm: bool) -> Self {
        Self { confirm }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.confirm_alerts)
    }
}

#[async_trait]
impl NotifierPort for TerminalNotifier {
    async fn alert(&self, message: &str) {
        eprintln!("\n>> {}", message);

        if self.confirm {
            eprint!("   [press Enter to continue]");
            let waited = tokio::task::spawn_blocking(|| {
                let mut line = String::new();
                std::io::stdin().read_line(&mut line)
            })
            .await;
            match waited {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::debug!(error = %e, "Failed to read confirmation"),
                Err(e) => tracing::debug!(error = %e, "Confirmation task failed"),
            }
        }
    }
}
