//! Broadcast notifier — fan notifications out to live subscribers
//!
//! Backed by a `tokio::sync::broadcast` channel. Each subscriber gets its
//! own stream; a subscriber that falls more than `capacity` messages
//! behind skips what it missed instead of blocking delivery.

use super::{Notification, Notifier};
use crate::config::HubConfig;
use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Stream of notifications for one subscriber
pub type NotificationStream = BoxStream<'static, Notification>;

/// Notifier delivering to every live subscriber
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
}

impl BroadcastNotifier {
    /// Create a notifier buffering up to `capacity` messages per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Create a notifier sized by `HubConfig::notification_capacity`
    pub fn from_config(config: &HubConfig) -> Self {
        Self::new(config.notification_capacity)
    }

    /// Subscribe to notifications delivered from now on
    pub fn subscribe(&self) -> NotificationStream {
        let stream = BroadcastStream::new(self.sender.subscribe()).filter_map(|item| match item {
            Ok(notification) => Some(notification),
            Err(e) => {
                tracing::warn!(error = %e, "Notification subscriber lagged");
                None
            }
        });
        Box::pin(stream)
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl Notifier for BroadcastNotifier {
    async fn notify(&self, notification: Notification) -> Result<()> {
        if self.sender.send(notification).is_err() {
            tracing::debug!("No notification subscribers");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "broadcast"
    }
}
