//! Draft validation — the create-form rules as a reusable check
//!
//! The registry itself accepts any draft. Callers that take input from
//! users run `validate_draft` first; `EventHub` does so when
//! `HubConfig::validate_drafts` is set.

use crate::error::{RegistryError, Result};
use crate::types::{EventDraft, EventType, DATE_FORMAT};
use chrono::NaiveDate;

/// Check a draft against every create-form rule
///
/// All violations are collected into a single `RegistryError::Validation`.
pub fn validate_draft(draft: &EventDraft) -> Result<()> {
    let mut issues = Vec::new();

    let required = [
        ("title", &draft.title),
        ("podcast name", &draft.podcast_name),
        ("description", &draft.description),
        ("host", &draft.host),
        ("date", &draft.date),
        ("time", &draft.time),
        ("venue", &draft.venue),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(format!("{} is required", field));
        }
    }

    if !draft.date.trim().is_empty()
        && NaiveDate::parse_from_str(draft.date.trim(), DATE_FORMAT).is_err()
    {
        issues.push(format!("date '{}' is not in YYYY-MM-DD form", draft.date));
    }

    if draft.total_seats == 0 {
        issues.push("total seats must be at least 1".to_string());
    }

    if !draft.ticket_price.is_finite() || draft.ticket_price < 0.0 {
        issues.push(format!(
            "ticket price must be a non-negative amount, got {}",
            draft.ticket_price
        ));
    }

    match draft.event_type {
        EventType::Physical if is_blank(&draft.location) => {
            issues.push("physical events need a location".to_string());
        }
        EventType::Virtual if is_blank(&draft.meet_link) => {
            issues.push("virtual events need a meeting link".to_string());
        }
        _ => {}
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(RegistryError::Validation { issues })
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
