//! Initial registry contents
//!
//! Ships the two sample events the hub starts with and loads alternative
//! fixtures from JSON files.

use crate::error::{RegistryError, Result};
use crate::types::{EventType, PodcastEvent, TimelineItem};
use std::collections::HashSet;
use std::path::Path;

/// The built-in sample events
pub fn sample_events() -> Vec<PodcastEvent> {
    vec![
        PodcastEvent {
            id: "1".to_string(),
            title: "Podcast Production Masterclass".to_string(),
            podcast_name: "Audio Masters".to_string(),
            description: "Learn how to produce professional quality podcasts with industry experts."
                .to_string(),
            event_type: EventType::Physical,
            date: "2025-04-20".to_string(),
            time: "10:00 AM".to_string(),
            venue: "Sound Studio NYC".to_string(),
            location: Some("240 Broadway Ave, New York, NY".to_string()),
            meet_link: None,
            ticket_price: 75.0,
            total_seats: 50,
            available_seats: 32,
            host: "Sarah Johnson".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ),
            timeline: vec![
                TimelineItem::new("10:00 AM", "Registration & Welcome Coffee"),
                TimelineItem::new("10:30 AM", "Introduction to Podcast Production"),
                TimelineItem::new("12:00 PM", "Lunch Break"),
                TimelineItem::new("1:00 PM", "Equipment Workshop"),
                TimelineItem::new("3:00 PM", "Q&A Session"),
                TimelineItem::new("4:00 PM", "Networking"),
            ],
        },
        PodcastEvent {
            id: "2".to_string(),
            title: "Storytelling for Podcasters".to_string(),
            podcast_name: "Narrative Hub".to_string(),
            description:
                "Virtual workshop on crafting compelling stories for your podcast audience."
                    .to_string(),
            event_type: EventType::Virtual,
            date: "2025-05-15".to_string(),
            time: "2:00 PM".to_string(),
            venue: "Zoom Webinar".to_string(),
            location: None,
            meet_link: Some("https://zoom.us/j/123456789".to_string()),
            ticket_price: 25.0,
            total_seats: 100,
            available_seats: 65,
            host: "Michael Chen".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1478737270239-2f02b77fc618?q=80&w=2070&auto=format&fit=crop"
                    .to_string(),
            ),
            timeline: vec![
                TimelineItem::new("2:00 PM", "Introduction to Storytelling"),
                TimelineItem::new("2:30 PM", "Story Structure Workshop"),
                TimelineItem::new("3:30 PM", "Interactive Exercise"),
                TimelineItem::new("4:15 PM", "Feedback & Discussion"),
            ],
        },
    ]
}

/// Load events from a JSON array on disk
///
/// Rejects files whose events break id uniqueness, the seat invariant,
/// positive capacity or a non-negative ticket price.
pub fn load_fixture(path: impl AsRef<Path>) -> Result<Vec<PodcastEvent>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| {
        RegistryError::Fixture(format!(
            "Failed to read fixture file {}: {}",
            path.display(),
            e
        ))
    })?;

    let events: Vec<PodcastEvent> = serde_json::from_str(&json)?;
    check_events(&events)?;

    tracing::debug!(path = %path.display(), count = events.len(), "Fixture loaded");
    Ok(events)
}

/// Verify a batch of events satisfies the registry invariants
///
/// Ids are non-empty and unique, capacity is positive, the ticket price is
/// a finite non-negative amount, and `available_seats <= total_seats`.
pub fn check_events(events: &[PodcastEvent]) -> Result<()> {
    let mut seen = HashSet::new();
    for event in events {
        if event.id.is_empty() {
            return Err(RegistryError::Fixture(format!(
                "Event '{}' has an empty id",
                event.title
            )));
        }
        if !seen.insert(event.id.as_str()) {
            return Err(RegistryError::Fixture(format!(
                "Duplicate event id: {}",
                event.id
            )));
        }
        if event.total_seats == 0 {
            return Err(RegistryError::Fixture(format!(
                "Event {} has no seat capacity",
                event.id
            )));
        }
        if !event.ticket_price.is_finite() || event.ticket_price < 0.0 {
            return Err(RegistryError::Fixture(format!(
                "Event {} has invalid ticket price {}",
                event.id, event.ticket_price
            )));
        }
        if event.available_seats > event.total_seats {
            return Err(RegistryError::Fixture(format!(
                "Event {} has {} available seats but only {} total",
                event.id, event.available_seats, event.total_seats
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_samples_are_valid() {
        let events = sample_events();
        assert_eq!(events.len(), 2);
        check_events(&events).unwrap();
        assert_eq!(events[0].id, "1");
        assert_eq!(events[0].total_seats, 50);
        assert_eq!(events[0].available_seats, 32);
        assert_eq!(events[1].event_type, EventType::Virtual);
        assert_eq!(events[1].timeline.len(), 4);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut events = sample_events();
        events[1].id = "1".to_string();
        let err = check_events(&events).unwrap_err();
        assert!(matches!(err, RegistryError::Fixture(ref m) if m.contains("Duplicate")));
    }

    #[test]
    fn test_overfull_event_rejected() {
        let mut events = sample_events();
        events[0].available_seats = 51;
        assert!(check_events(&events).is_err());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut events = sample_events();
        events[0].total_seats = 0;
        events[0].available_seats = 0;
        let err = check_events(&events).unwrap_err();
        assert!(matches!(err, RegistryError::Fixture(ref m) if m.contains("no seat capacity")));
    }

    #[test]
    fn test_bad_ticket_price_rejected() {
        let mut events = sample_events();
        events[0].ticket_price = -5.0;
        assert!(matches!(check_events(&events), Err(RegistryError::Fixture(_))));

        events[0].ticket_price = f64::INFINITY;
        assert!(matches!(check_events(&events), Err(RegistryError::Fixture(_))));

        events[0].ticket_price = 0.0;
        check_events(&events).unwrap();
    }

    #[test]
    fn test_load_fixture_rejects_broken_event() {
        let mut events = sample_events();
        events[1].total_seats = 0;
        events[1].available_seats = 0;
        events[1].ticket_price = -5.0;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&events).unwrap().as_bytes())
            .unwrap();

        assert!(matches!(load_fixture(file.path()), Err(RegistryError::Fixture(_))));
    }

    #[test]
    fn test_load_fixture_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&sample_events()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_fixture(file.path()).unwrap();
        assert_eq!(loaded, sample_events());
    }

    #[test]
    fn test_load_fixture_missing_file() {
        let err = load_fixture("/tmp/nonexistent-podwave-fixture.json").unwrap_err();
        assert!(matches!(err, RegistryError::Fixture(_)));
    }

    #[test]
    fn test_load_fixture_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = load_fixture(file.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Serialization(_)));
    }
}
