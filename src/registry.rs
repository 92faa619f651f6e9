//! In-memory event registry
//!
//! `EventRegistry` is the single owner of the event collection. Every
//! operation is a plain state transition returning a structured result;
//! notifying the user about the outcome is left to the caller (see
//! `EventHub`).
//!
//! Seat invariant: `0 <= available_seats <= total_seats` for every event.
//! `register` is the only mutation and only ever lowers `available_seats`.

use crate::error::{RegistryError, Result};
use crate::query::EventFilter;
use crate::seed::{check_events, sample_events};
use crate::types::{EventDraft, PodcastEvent, Registration, RegistryStats};

/// Owned collection of events in insertion order
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    events: Vec<PodcastEvent>,
}

impl EventRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in sample events
    pub fn with_samples() -> Self {
        Self {
            events: sample_events(),
        }
    }

    /// Create a registry from existing events, checking ids and seat counts
    pub fn from_events(events: Vec<PodcastEvent>) -> Result<Self> {
        check_events(&events)?;
        Ok(Self { events })
    }

    /// Add a new event with a fresh id and every seat available
    pub fn create(&mut self, draft: EventDraft) -> &PodcastEvent {
        let id = self.fresh_id();
        let event = PodcastEvent::from_draft(id, draft);

        tracing::info!(
            event_id = %event.id,
            title = %event.title,
            total_seats = event.total_seats,
            "Event created"
        );

        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Look up an event by id
    pub fn get(&self, id: &str) -> Option<&PodcastEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Take `quantity` seats of an event
    ///
    /// Checks run in order: unknown id, zero quantity, insufficient
    /// capacity. A failed call leaves the registry untouched.
    pub fn register(&mut self, id: &str, quantity: u32) -> Result<Registration> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        if quantity == 0 {
            return Err(RegistryError::InvalidQuantity {
                requested: quantity,
                reason: "at least one ticket is required".to_string(),
            });
        }

        if quantity > event.available_seats {
            tracing::warn!(
                event_id = %id,
                requested = quantity,
                available = event.available_seats,
                "Registration exceeds remaining capacity"
            );
            return Err(RegistryError::InsufficientCapacity {
                event_id: id.to_string(),
                available: event.available_seats,
                requested: quantity,
            });
        }

        event.available_seats -= quantity;

        tracing::info!(
            event_id = %id,
            quantity,
            remaining = event.available_seats,
            "Registration accepted"
        );

        Ok(Registration {
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            quantity,
            seats_remaining: event.available_seats,
            total_price: event.quote(quantity),
        })
    }

    /// All events in insertion order
    pub fn events(&self) -> &[PodcastEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events matching a filter, in insertion order
    pub fn search(&self, filter: &EventFilter) -> Vec<&PodcastEvent> {
        filter.apply(&self.events)
    }

    /// Aggregate counts across all events
    pub fn stats(&self) -> RegistryStats {
        let mut stats = RegistryStats::default();

        for event in &self.events {
            *stats.by_type.entry(event.event_type).or_insert(0) += 1;
            stats.total += 1;
            stats.seats_sold += u64::from(event.seats_taken());
            stats.seats_available += u64::from(event.available_seats);
            if event.is_sold_out() {
                stats.sold_out += 1;
            }
        }

        stats
    }

    /// A v4 uuid not already used by a seeded or created event
    fn fresh_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
