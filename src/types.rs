//! Core event types for podwave-events
//!
//! All types use camelCase JSON serialization so fixtures and the
//! presentation layer share one shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Date format used by `PodcastEvent::date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether an event happens online or at a venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Virtual,
    Physical,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Virtual => "virtual",
            Self::Physical => "physical",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agenda entry of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Display time (e.g., "10:30 AM")
    pub time: String,

    /// What happens at that time
    pub description: String,
}

impl TimelineItem {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
        }
    }

    /// A row is blank when either field has no visible text
    pub fn is_blank(&self) -> bool {
        self.time.trim().is_empty() || self.description.trim().is_empty()
    }
}

/// A single podcast event listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastEvent {
    /// Unique event identifier, never reassigned
    pub id: String,

    pub title: String,

    pub podcast_name: String,

    pub description: String,

    pub event_type: EventType,

    /// Calendar date as `YYYY-MM-DD`
    pub date: String,

    /// Display start time (e.g., "2:00 PM")
    pub time: String,

    /// Venue name, or the platform for virtual events
    pub venue: String,

    /// Street address for physical events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Meeting link for virtual events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,

    /// Price of one ticket
    pub ticket_price: f64,

    /// Seat capacity fixed at creation
    pub total_seats: u32,

    /// Seats still open, `0..=total_seats`
    pub available_seats: u32,

    pub host: String,

    /// Cover image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Agenda in the order it was supplied
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
}

impl PodcastEvent {
    /// Build an event from a draft with every seat open
    pub(crate) fn from_draft(id: String, draft: EventDraft) -> Self {
        Self {
            id,
            available_seats: draft.total_seats,
            title: draft.title,
            podcast_name: draft.podcast_name,
            description: draft.description,
            event_type: draft.event_type,
            date: draft.date,
            time: draft.time,
            venue: draft.venue,
            location: draft.location,
            meet_link: draft.meet_link,
            ticket_price: draft.ticket_price,
            total_seats: draft.total_seats,
            host: draft.host,
            image: draft.image,
            timeline: draft.timeline,
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }

    /// Seats already registered
    pub fn seats_taken(&self) -> u32 {
        self.total_seats.saturating_sub(self.available_seats)
    }

    /// Total price for `quantity` tickets
    pub fn quote(&self, quantity: u32) -> f64 {
        self.ticket_price * f64::from(quantity)
    }

    /// `date` as a calendar date, `None` if it does not parse
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Where attendees go: the address or meeting link, else the venue name
    pub fn venue_line(&self) -> &str {
        let detail = match self.event_type {
            EventType::Physical => self.location.as_deref(),
            EventType::Virtual => self.meet_link.as_deref(),
        };
        detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.venue)
    }

    /// The draft this event was created from
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            podcast_name: self.podcast_name.clone(),
            description: self.description.clone(),
            event_type: self.event_type,
            date: self.date.clone(),
            time: self.time.clone(),
            venue: self.venue.clone(),
            location: self.location.clone(),
            meet_link: self.meet_link.clone(),
            ticket_price: self.ticket_price,
            total_seats: self.total_seats,
            host: self.host.clone(),
            image: self.image.clone(),
            timeline: self.timeline.clone(),
        }
    }
}

/// Input to `create`: an event without id or seat count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub podcast_name: String,
    pub description: String,
    pub event_type: EventType,
    pub date: String,
    pub time: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_link: Option<String>,
    pub ticket_price: f64,
    pub total_seats: u32,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
}

impl EventDraft {
    /// Drop timeline rows missing a time or a description
    pub fn compact_timeline(&mut self) {
        self.timeline.retain(|item| !item.is_blank());
    }

    /// Add a timeline entry
    pub fn with_timeline_item(
        mut self,
        time: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.timeline.push(TimelineItem::new(time, description));
        self
    }
}

/// Receipt for a successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: String,
    pub event_title: String,
    /// Tickets registered
    pub quantity: u32,
    /// Seats left after this registration
    pub seats_remaining: u32,
    /// `ticket_price × quantity`
    pub total_price: f64,
}

/// Aggregate figures over the whole registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    /// Event count per type
    pub by_type: HashMap<EventType, u64>,

    /// Total event count
    pub total: u64,

    /// Seats registered across all events
    pub seats_sold: u64,

    /// Seats still open across all events
    pub seats_available: u64,

    /// Events with no seats left
    pub sold_out: u64,
}
