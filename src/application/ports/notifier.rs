//! Notifier Port - 阻塞式用户提示

use async_trait::async_trait;

/// Notifier Port
///
/// 向用户展示一条消息，直到用户确认后才返回。
#[async_trait]
pub trait NotifierPort: Send + Sync {
    async fn alert(&self, message: &str);
}
