//! User-facing notifications — the toast/alert boundary
//!
//! The registry returns plain results. Whoever drives it turns those
//! results into `Notification`s and hands them to a `Notifier`, which can
//! record them, log them, or fan them out to live subscribers.

use crate::error::{RegistryError, Result};
use crate::types::Registration;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod broadcast;
pub mod log;
pub mod memory;

pub use broadcast::BroadcastNotifier;
pub use log::LogNotifier;
pub use memory::MemoryNotifier;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    Success,
    /// Rendered as a destructive toast
    Error,
}

/// A message for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotifyLevel,

    /// Short heading (e.g., "Registration Failed")
    pub title: String,

    /// Human-readable detail
    pub description: String,

    /// Seats left, attached to capacity failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,

    /// Unix timestamp in milliseconds
    pub timestamp: u64,
}

impl Notification {
    fn new(level: NotifyLevel, title: &str, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            description: description.into(),
            available_seats: None,
            timestamp: now_millis(),
        }
    }

    /// Confirmation after `create`
    pub fn event_created() -> Self {
        Self::new(
            NotifyLevel::Success,
            "Event Created",
            "Your event has been successfully created.",
        )
    }

    /// Confirmation after a successful `register`
    pub fn registered(receipt: &Registration) -> Self {
        Self::new(
            NotifyLevel::Success,
            "Registration Successful",
            format!("You have registered for {} ticket(s).", receipt.quantity),
        )
    }

    /// Failure notice for any registry error
    pub fn failure(error: &RegistryError) -> Self {
        match error {
            RegistryError::NotFound(_) => {
                Self::new(NotifyLevel::Error, "Error", "Event not found.")
            }
            RegistryError::InsufficientCapacity { available, .. } => {
                let mut n = Self::new(
                    NotifyLevel::Error,
                    "Registration Failed",
                    format!("Only {} seats available.", available),
                );
                n.available_seats = Some(*available);
                n
            }
            RegistryError::Validation { .. } => {
                Self::new(NotifyLevel::Error, "Invalid Event", error.to_string())
            }
            other => Self::new(NotifyLevel::Error, "Registration Failed", other.to_string()),
        }
    }

    /// Success or failure notice for a registration attempt
    pub fn for_registration(outcome: &Result<Registration>) -> Self {
        match outcome {
            Ok(receipt) => Self::registered(receipt),
            Err(e) => Self::failure(e),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotifyLevel::Error
    }
}

/// Sink for user-facing notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification
    async fn notify(&self, notification: Notification) -> Result<()>;

    /// Notifier name (e.g., "memory", "log", "broadcast")
    fn name(&self) -> &str;
}

#[async_trait]
impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    async fn notify(&self, notification: Notification) -> Result<()> {
        (**self).notify(notification).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

pub(crate) fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
