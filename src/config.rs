//! Hub configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for an `EventHub`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubConfig {
    /// Start with the built-in sample events
    pub seed_samples: bool,

    /// Load initial events from this JSON file instead of the samples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,

    /// Upper bound on tickets per registration call (`None` = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tickets_per_registration: Option<u32>,

    /// Run create-form rules before accepting a draft
    pub validate_drafts: bool,

    /// Buffer size for memory and broadcast notifiers
    pub notification_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            fixture_path: None,
            max_tickets_per_registration: None,
            validate_drafts: true,
            notification_capacity: 256,
        }
    }
}

impl HubConfig {
    /// Config for an empty registry
    pub fn empty() -> Self {
        Self {
            seed_samples: false,
            ..Self::default()
        }
    }

    pub fn with_seed_samples(mut self, seed: bool) -> Self {
        self.seed_samples = seed;
        self
    }

    pub fn with_fixture_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture_path = Some(path.into());
        self
    }

    pub fn with_max_tickets(mut self, max: u32) -> Self {
        self.max_tickets_per_registration = Some(max);
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_drafts = validate;
        self
    }

    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }
}
