//! Shared event hub built on the registry
//!
//! `EventHub` is what the presentation layer talks to. It owns an
//! `EventRegistry` behind an async lock so any number of tasks can share
//! it, checks drafts and ticket limits, and turns every outcome into a
//! `Notification`.

use crate::config::HubConfig;
use crate::error::{RegistryError, Result};
use crate::notify::{Notification, Notifier};
use crate::query::EventFilter;
use crate::registry::EventRegistry;
use crate::seed::load_fixture;
use crate::types::{EventDraft, PodcastEvent, Registration, RegistryStats};
use crate::validation::validate_draft;
use tokio::sync::RwLock;

/// Thread-safe registry facade with notification dispatch
///
/// Each mutation holds the write lock across its seat check and update,
/// so concurrent registrations can never oversell an event.
pub struct EventHub {
    registry: RwLock<EventRegistry>,

    notifier: Box<dyn Notifier>,

    config: HubConfig,
}

impl EventHub {
    /// Create a hub seeded as `config` describes
    ///
    /// A `fixture_path` takes precedence over `seed_samples`.
    pub fn new(config: HubConfig, notifier: impl Notifier + 'static) -> Result<Self> {
        let registry = match (&config.fixture_path, config.seed_samples) {
            (Some(path), _) => EventRegistry::from_events(load_fixture(path)?)?,
            (None, true) => EventRegistry::with_samples(),
            (None, false) => EventRegistry::new(),
        };

        tracing::info!(
            events = registry.len(),
            notifier = notifier.name(),
            "Event hub ready"
        );

        Ok(Self::with_registry(registry, config, notifier))
    }

    /// Wrap an existing registry
    pub fn with_registry(
        registry: EventRegistry,
        config: HubConfig,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            registry: RwLock::new(registry),
            notifier: Box::new(notifier),
            config,
        }
    }

    /// Create an event from a user-supplied draft
    ///
    /// Blank timeline rows are dropped. When `validate_drafts` is on, a
    /// draft breaking any create-form rule is rejected and nothing is added.
    pub async fn create(&self, mut draft: EventDraft) -> Result<PodcastEvent> {
        draft.compact_timeline();
        draft.date = draft.date.trim().to_string();

        if self.config.validate_drafts {
            if let Err(e) = validate_draft(&draft) {
                self.dispatch(Notification::failure(&e)).await;
                return Err(e);
            }
        }

        let event = {
            let mut registry = self.registry.write().await;
            registry.create(draft).clone()
        };

        self.dispatch(Notification::event_created()).await;
        Ok(event)
    }

    /// Look up an event by id
    pub async fn get(&self, id: &str) -> Option<PodcastEvent> {
        let registry = self.registry.read().await;
        let found = registry.get(id).cloned();
        tracing::debug!(event_id = %id, found = found.is_some(), "Event lookup");
        found
    }

    /// Register `quantity` tickets for an event
    ///
    /// `is_ok()` on the result tells the caller whether to close its
    /// registration dialog.
    pub async fn register(&self, id: &str, quantity: u32) -> Result<Registration> {
        let outcome = {
            let mut registry = self.registry.write().await;
            match self.config.max_tickets_per_registration {
                Some(max) if quantity > max && registry.get(id).is_some() => {
                    Err(RegistryError::InvalidQuantity {
                        requested: quantity,
                        reason: format!("at most {} tickets per registration", max),
                    })
                }
                _ => registry.register(id, quantity),
            }
        };

        self.dispatch(Notification::for_registration(&outcome)).await;
        outcome
    }

    /// All events in insertion order
    pub async fn list(&self) -> Vec<PodcastEvent> {
        self.registry.read().await.events().to_vec()
    }

    /// Events matching a filter
    pub async fn search(&self, filter: &EventFilter) -> Vec<PodcastEvent> {
        let registry = self.registry.read().await;
        registry.search(filter).into_iter().cloned().collect()
    }

    /// Aggregate counts across all events
    pub async fn stats(&self) -> RegistryStats {
        self.registry.read().await.stats()
    }

    /// Number of events
    pub async fn len(&self) -> usize {
        self.registry.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.is_empty()
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Get the notifier name
    pub fn notifier_name(&self) -> &str {
        self.notifier.name()
    }

    /// Delivery failures never change an operation's outcome
    async fn dispatch(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(notification).await {
            tracing::warn!(
                notifier = self.notifier.name(),
                error = %e,
                "Failed to deliver notification"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemoryNotifier, NotifyLevel};
    use crate::seed::sample_events;
    use async_trait::async_trait;

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _notification: Notification) -> Result<()> {
            Err(RegistryError::Notify("toast service down".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn hub_with(config: HubConfig) -> (EventHub, MemoryNotifier) {
        let notifier = MemoryNotifier::default();
        let hub = EventHub::new(config, notifier.clone()).unwrap();
        (hub, notifier)
    }

    #[tokio::test]
    async fn test_seeding_follows_config() {
        let (hub, _) = hub_with(HubConfig::default());
        assert_eq!(hub.len().await, 2);
        assert_eq!(hub.notifier_name(), "memory");

        let (empty, _) = hub_with(HubConfig::empty());
        assert!(empty.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_notifies_success() {
        let (hub, notifier) = hub_with(HubConfig::default());
        let receipt = hub.register("1", 2).await.unwrap();
        assert_eq!(receipt.seats_remaining, 30);

        let n = notifier.latest().await.unwrap();
        assert_eq!(n.level, NotifyLevel::Success);
        assert_eq!(n.description, "You have registered for 2 ticket(s).");
    }

    #[tokio::test]
    async fn test_register_notifies_capacity_failure() {
        let (hub, notifier) = hub_with(HubConfig::default());
        assert!(hub.register("2", 66).await.is_err());

        let n = notifier.latest().await.unwrap();
        assert_eq!(n.description, "Only 65 seats available.");
        assert_eq!(n.available_seats, Some(65));
        assert_eq!(hub.get("2").await.unwrap().available_seats, 65);
    }

    #[tokio::test]
    async fn test_ticket_limit() {
        let (hub, notifier) = hub_with(HubConfig::default().with_max_tickets(4));
        let err = hub.register("1", 5).await.unwrap_err();
        assert!(matches!(err, RegistryError::InvalidQuantity { requested: 5, .. }));
        assert_eq!(notifier.latest().await.unwrap().title, "Registration Failed");
        assert_eq!(hub.get("1").await.unwrap().available_seats, 32);

        // unknown ids still report not found
        assert!(matches!(
            hub.register("nope", 5).await.unwrap_err(),
            RegistryError::NotFound(_)
        ));

        hub.register("1", 4).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_validates_and_compacts() {
        let (hub, notifier) = hub_with(HubConfig::empty());

        let mut bad = sample_events()[0].to_draft();
        bad.location = None;
        assert!(matches!(
            hub.create(bad).await.unwrap_err(),
            RegistryError::Validation { .. }
        ));
        assert!(hub.is_empty().await);
        assert!(notifier.latest().await.unwrap().is_error());

        let draft = sample_events()[0].to_draft().with_timeline_item("", "");
        let event = hub.create(draft).await.unwrap();
        assert_eq!(event.timeline.len(), 6);
        assert_eq!(event.available_seats, 50);
        assert_eq!(notifier.latest().await.unwrap().title, "Event Created");
    }

    #[tokio::test]
    async fn test_created_date_parses() {
        let (hub, _) = hub_with(HubConfig::empty());
        let mut draft = sample_events()[0].to_draft();
        draft.date = " 2025-06-01 ".to_string();

        let event = hub.create(draft).await.unwrap();
        assert_eq!(event.date, "2025-06-01");
        for event in hub.list().await {
            assert!(event.parsed_date().is_some());
        }
    }

    #[tokio::test]
    async fn test_create_without_validation_accepts_anything() {
        let (hub, _) = hub_with(HubConfig::empty().with_validation(false));
        let mut draft = sample_events()[1].to_draft();
        draft.title = String::new();
        draft.meet_link = None;
        let event = hub.create(draft).await.unwrap();
        assert_eq!(hub.get(&event.id).await.unwrap().title, "");
    }

    #[tokio::test]
    async fn test_notifier_failure_keeps_outcome() {
        let hub = EventHub::new(HubConfig::default(), FailingNotifier).unwrap();
        let receipt = hub.register("1", 1).await.unwrap();
        assert_eq!(receipt.seats_remaining, 31);
    }

    #[tokio::test]
    async fn test_bad_fixture_path() {
        let config = HubConfig::default().with_fixture_path("/tmp/nonexistent-podwave-hub.json");
        assert!(matches!(
            EventHub::new(config, MemoryNotifier::default()),
            Err(RegistryError::Fixture(_))
        ));
    }
}
