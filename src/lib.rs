//! # podwave-events
//!
//! In-memory registry for podcast events with seat-inventory registration.
//!
//! ## Overview
//!
//! `podwave-events` keeps the canonical list of podcast events for an event
//! hub front end: creating listings, looking them up, and registering for
//! tickets without ever overselling a venue.
//!
//! ## Quick Start
//!
//! ```rust
//! use podwave_events::{EventHub, HubConfig, MemoryNotifier};
//!
//! # async fn example() -> podwave_events::Result<()> {
//! // Start with the built-in sample events
//! let hub = EventHub::new(HubConfig::default(), MemoryNotifier::default())?;
//!
//! // Register two tickets for the masterclass
//! let receipt = hub.register("1", 2).await?;
//! println!("{} seats left", receipt.seats_remaining);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **EventRegistry** — owned collection; pure create / get / register
//! - **EventHub** — shared async facade that serializes mutations and
//!   dispatches notifications
//! - **Notifier** trait — toast/alert sink (memory, log, broadcast)
//! - **EventFilter** — search and type filtering for listings

pub mod config;
pub mod error;
pub mod hub;
pub mod notify;
pub mod query;
pub mod registry;
pub mod seed;
pub mod types;
pub mod validation;

// Re-export core types
pub use config::HubConfig;
pub use error::{RegistryError, Result};
pub use hub::EventHub;
pub use notify::{
    BroadcastNotifier, LogNotifier, MemoryNotifier, Notification, Notifier, NotifyLevel,
};
pub use query::{EventFilter, TypeFilter};
pub use registry::EventRegistry;
pub use seed::{load_fixture, sample_events};
pub use types::{EventDraft, EventType, PodcastEvent, Registration, RegistryStats, TimelineItem};
pub use validation::validate_draft;
