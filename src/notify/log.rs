//! Notifier that writes to the `tracing` log

use super::{Notification, Notifier, NotifyLevel};
use crate::error::Result;
use async_trait::async_trait;

/// Emits each notification as a structured log line
///
/// Successes log at `info`, failures at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: Notification) -> Result<()> {
        match notification.level {
            NotifyLevel::Success => tracing::info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            NotifyLevel::Error => tracing::warn!(
                title = %notification.title,
                available_seats = ?notification.available_seats,
                "{}",
                notification.description
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
