//! Core event log types
//!
//! The envelope wire shape is shared by the HTTP API and the on-disk archive:
//!
//! ```json
//! {"type": "system", "timestamp": "2006-01-13T00:00:00Z", "event_id": "s_123",
//!  "event": {"system_id": "id_123", "location": "europe", "operation": "read"}}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator carried in the envelope's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Action performed by a user account
    User,
    /// Action performed by a system component
    System,
}

impl EventKind {
    /// Wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::User => "user",
            EventKind::System => "system",
        }
    }

    /// Parse a wire name, returning `None` for unknown kinds
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(EventKind::User),
            "system" => Some(EventKind::System),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region a system event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Europe,
    Us,
}

impl Location {
    /// All accepted locations, in wire form
    pub const ALLOWED: [&'static str; 2] = ["europe", "us"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Europe => "europe",
            Location::Us => "us",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "europe" => Some(Location::Europe),
            "us" => Some(Location::Us),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a user-originated event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    /// Username associated with the event
    pub username: String,

    /// Email address of the user account
    pub email: String,

    /// Operation carried out by the user (e.g. "read", "write")
    pub operation: String,
}

/// Payload of a system-originated event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemEvent {
    /// System generated id associated with the event
    pub system_id: String,

    /// Where the system is based
    pub location: Location,

    /// Operation carried out by the system
    pub operation: String,
}

/// Typed event payload, tagged by `type` with the body under `event`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "event", rename_all = "lowercase")]
pub enum EventPayload {
    User(UserEvent),
    System(SystemEvent),
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::User(_) => EventKind::User,
            EventPayload::System(_) => EventKind::System,
        }
    }

    pub fn operation(&self) -> &str {
        match self {
            EventPayload::User(u) => &u.operation,
            EventPayload::System(s) => &s.operation,
        }
    }
}

/// A validated event log record
///
/// The `type` field and the payload variant cannot disagree: both are the
/// same enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// When the event took place (always in the past once validated)
    pub timestamp: DateTime<Utc>,

    /// Caller-supplied identifier, not guaranteed unique
    pub event_id: String,

    #[serde(flatten)]
    pub event: EventPayload,
}

impl EventEnvelope {
    /// Build a user event envelope
    pub fn user(
        event_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        username: impl Into<String>,
        email: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            event_id: event_id.into(),
            event: EventPayload::User(UserEvent {
                username: username.into(),
                email: email.into(),
                operation: operation.into(),
            }),
        }
    }

    /// Build a system event envelope
    pub fn system(
        event_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        system_id: impl Into<String>,
        location: Location,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            event_id: event_id.into(),
            event: EventPayload::System(SystemEvent {
                system_id: system_id.into(),
                location,
                operation: operation.into(),
            }),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }
}

/// Outcome of inserting a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResult {
    /// The event id provided by the caller (empty if none could be read)
    pub event_id: String,

    /// Whether the record was archived
    pub success: bool,

    /// Empty on success, otherwise a reason code
    #[serde(default)]
    pub error: String,
}

impl InsertResult {
    pub fn accepted(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            success: true,
            error: String::new(),
        }
    }

    pub fn rejected(event_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            success: false,
            error: reason.into(),
        }
    }
}
