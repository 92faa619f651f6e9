//! In-memory notifier for development and testing

use super::{Notification, Notifier};
use crate::config::HubConfig;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps delivered notifications in a bounded `Vec`
///
/// Oldest entries are drained once `max_notifications` is exceeded.
/// Cloning shares the same log, so a test can keep a handle after
/// moving the notifier into a hub.
#[derive(Clone)]
pub struct MemoryNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
    max_notifications: usize,
}

impl MemoryNotifier {
    /// Create a notifier holding at most `max_notifications` (0 = unbounded)
    pub fn new(max_notifications: usize) -> Self {
        Self {
            notifications: Arc::new(RwLock::new(Vec::new())),
            max_notifications,
        }
    }

    /// Create a notifier sized by `HubConfig::notification_capacity`
    pub fn from_config(config: &HubConfig) -> Self {
        Self::new(config.notification_capacity)
    }

    pub async fn count(&self) -> usize {
        self.notifications.read().await.len()
    }

    /// Most recent notifications first
    pub async fn list(&self, limit: usize) -> Vec<Notification> {
        let notifications = self.notifications.read().await;
        notifications.iter().rev().take(limit).cloned().collect()
    }

    /// The last notification delivered
    pub async fn latest(&self) -> Option<Notification> {
        self.notifications.read().await.last().cloned()
    }

    pub async fn clear(&self) {
        self.notifications.write().await.clear();
    }
}

impl Default for MemoryNotifier {
    fn default() -> Self {
        Self::new(1_000)
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<()> {
        let mut notifications = self.notifications.write().await;
        notifications.push(notification);

        if self.max_notifications > 0 && notifications.len() > self.max_notifications {
            let drain_count = notifications.len() - self.max_notifications;
            notifications.drain(..drain_count);
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
