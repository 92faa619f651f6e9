//! Error types for podwave-events

use thiserror::Error;

/// Errors that can occur in the event registry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No event with the given identifier
    #[error("Event not found: {0}")]
    NotFound(String),

    /// Requested more tickets than the event has left
    #[error("Only {available} seats available for event '{event_id}' (requested {requested})")]
    InsufficientCapacity {
        event_id: String,
        available: u32,
        requested: u32,
    },

    /// Ticket quantity outside the accepted range
    #[error("Invalid ticket quantity {requested}: {reason}")]
    InvalidQuantity {
        requested: u32,
        reason: String,
    },

    /// Draft failed one or more create-form rules
    #[error("Event draft is invalid: {}", .issues.join("; "))]
    Validation {
        issues: Vec<String>,
    },

    /// Seed data violates a registry invariant
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Notification dispatch failure
    #[error("Notification error: {0}")]
    Notify(String),
}

impl RegistryError {
    /// Whether the user can recover by adjusting input and trying again
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Fixture(_) | Self::Serialization(_))
    }
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_reports_available() {
        let err = RegistryError::InsufficientCapacity {
            event_id: "1".to_string(),
            available: 3,
            requested: 5,
        };
        assert!(err.to_string().starts_with("Only 3 seats available"));
    }

    #[test]
    fn test_validation_message_joins_issues() {
        let err = RegistryError::Validation {
            issues: vec!["title is required".to_string(), "host is required".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Event draft is invalid: title is required; host is required"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(RegistryError::NotFound("x".into()).is_recoverable());
        assert!(RegistryError::Notify("down".into()).is_recoverable());
        assert!(!RegistryError::Fixture("dup".into()).is_recoverable());
    }
}
