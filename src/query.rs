//! Listing filters for browsing events

use crate::types::{EventType, PodcastEvent};
use serde::{Deserialize, Serialize};

/// Event-type selector of the browse page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Virtual,
    Physical,
}

impl TypeFilter {
    pub fn matches(&self, event_type: EventType) -> bool {
        match self {
            Self::All => true,
            Self::Virtual => event_type == EventType::Virtual,
            Self::Physical => event_type == EventType::Physical,
        }
    }
}

impl From<EventType> for TypeFilter {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Virtual => Self::Virtual,
            EventType::Physical => Self::Physical,
        }
    }
}

/// Search text plus type filter
///
/// Text matches case-insensitively against title, podcast name and
/// description. An empty search matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default)]
    pub event_type: TypeFilter,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn with_type(mut self, filter: impl Into<TypeFilter>) -> Self {
        self.event_type = filter.into();
        self
    }

    pub fn matches(&self, event: &PodcastEvent) -> bool {
        self.event_type.matches(event.event_type) && self.matches_text(event)
    }

    fn matches_text(&self, event: &PodcastEvent) -> bool {
        let needle = match self.search.as_deref() {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return true,
        };
        [&event.title, &event.podcast_name, &event.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching events in their original order
    pub fn apply<'a>(&self, events: &'a [PodcastEvent]) -> Vec<&'a PodcastEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
