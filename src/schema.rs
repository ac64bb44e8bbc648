//! Event schema validation — turn raw JSON records into typed envelopes
//!
//! Records arrive as untyped JSON. `validate` checks them in a fixed order
//! and reports the first violation as a structured [`ValidationError`]
//! carrying the offending field path, so callers can classify failures
//! without inspecting message text.
//!
//! Check order:
//!
//! 1. record is a JSON object
//! 2. `timestamp` parses and lies strictly in the past
//! 3. `type` is `user` or `system`
//! 4. for system events, `event.location` is an allowed location
//! 5. structural fields are present and strings
//! 6. `email` is a syntactically valid address

use crate::types::{EventEnvelope, EventKind, EventPayload, Location, SystemEvent, UserEvent};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};
use validator::ValidateEmail;

/// What went wrong while validating a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The record itself is not a JSON object
    NotAnObject,
    /// `timestamp` is missing, unparseable, or not in the past
    InvalidTimestamp,
    /// `type` is not one of the known event kinds
    UnknownType,
    /// `event.location` is not an allowed location
    InvalidLocation,
    /// A required field is absent
    MissingField,
    /// A field is present with the wrong JSON type
    WrongType,
    /// `event.email` is not a valid address
    InvalidEmail,
}

/// A single record's validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. `event.location`)
    pub field: String,

    pub kind: ValidationErrorKind,

    /// Human-readable description of the failure
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::MissingField, "Field required")
    }

    fn not_a_string(field: impl Into<String>) -> Self {
        Self::new(field, ValidationErrorKind::WrongType, "Input should be a valid string")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} found in {}", self.message, self.field)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a raw record against the event schema, using the current time
pub fn validate_now(raw: &Value) -> Result<EventEnvelope, ValidationError> {
    validate(raw, Utc::now())
}

/// Validate a raw record against the event schema
///
/// `now` is the reference instant for the past-timestamp check.
///
/// `timestamp` accepts RFC 3339 strings, ISO 8601 datetimes without an
/// offset (`T` or space separated), bare `YYYY-MM-DD` dates, and Unix epoch
/// numbers (integer or fractional seconds; magnitudes above `2e10` are read
/// as milliseconds). Offset-less values are interpreted as UTC, never as
/// local time, and a bare date means midnight UTC.
pub fn validate(raw: &Value, now: DateTime<Utc>) -> Result<EventEnvelope, ValidationError> {
    let record = raw.as_object().ok_or_else(|| {
        ValidationError::new(
            "record",
            ValidationErrorKind::NotAnObject,
            "Input should be a valid object",
        )
    })?;

    let timestamp = parse_timestamp(record.get("timestamp"), now)?;
    let kind = parse_kind(record.get("type"))?;

    if kind == EventKind::System {
        check_location(record.get("event"))?;
    }

    let event_id = require_str(record, "", "event_id")?;
    let body = match record.get("event") {
        None | Some(Value::Null) => return Err(ValidationError::missing("event")),
        Some(Value::Object(body)) => body,
        Some(_) => {
            return Err(ValidationError::new(
                "event",
                ValidationErrorKind::WrongType,
                "Input should be a valid object",
            ))
        }
    };

    let event = match kind {
        EventKind::User => EventPayload::User(parse_user(body)?),
        EventKind::System => EventPayload::System(parse_system(body)?),
    };

    Ok(EventEnvelope {
        timestamp,
        event_id: event_id.to_string(),
        event,
    })
}

fn parse_timestamp(
    value: Option<&Value>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let invalid = |message: &str| {
        ValidationError::new("timestamp", ValidationErrorKind::InvalidTimestamp, message)
    };

    let parsed = match value {
        None | Some(Value::Null) => return Err(invalid("Field required")),
        Some(Value::String(s)) => parse_datetime_str(s)
            .ok_or_else(|| invalid("Input should be a valid datetime"))?,
        Some(Value::Number(n)) => parse_epoch(n)
            .ok_or_else(|| invalid("Input should be a valid datetime"))?,
        Some(_) => return Err(invalid("Input should be a valid datetime")),
    };

    if parsed >= now {
        return Err(invalid("Input should be in the past"));
    }
    Ok(parsed)
}

/// Epoch values with a larger magnitude than this are milliseconds
const EPOCH_MILLIS_THRESHOLD: f64 = 2e10;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// RFC 3339 with offset, a naive datetime or a bare date, both taken as UTC
fn parse_datetime_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Unix seconds, or milliseconds past [`EPOCH_MILLIS_THRESHOLD`]
fn parse_epoch(n: &serde_json::Number) -> Option<DateTime<Utc>> {
    if let Some(whole) = n.as_i64() {
        return if (whole as f64).abs() > EPOCH_MILLIS_THRESHOLD {
            Utc.timestamp_millis_opt(whole).single()
        } else {
            Utc.timestamp_opt(whole, 0).single()
        };
    }

    let value = n.as_f64()?;
    if !value.is_finite() {
        return None;
    }
    let seconds = if value.abs() > EPOCH_MILLIS_THRESHOLD {
        value / 1000.0
    } else {
        value
    };
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    Utc.timestamp_opt(whole as i64, nanos).single()
}

fn parse_kind(value: Option<&Value>) -> Result<EventKind, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::missing("type")),
        Some(Value::String(s)) => EventKind::parse(s).ok_or_else(|| {
            ValidationError::new(
                "type",
                ValidationErrorKind::UnknownType,
                "Input should be 'user' or 'system'",
            )
        }),
        Some(_) => Err(ValidationError::not_a_string("type")),
    }
}

/// Only a present-but-disallowed location is reported here; a missing one
/// falls through to the structural checks.
fn check_location(event: Option<&Value>) -> Result<(), ValidationError> {
    let location = match event.and_then(|e| e.get("location")) {
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    match location.as_str().and_then(Location::parse) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(
            "event.location",
            ValidationErrorKind::InvalidLocation,
            format!("Input should be '{}'", Location::ALLOWED.join("' or '")),
        )),
    }
}

fn require_str<'a>(
    map: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a str, ValidationError> {
    let path = if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    };

    match map.get(key) {
        None | Some(Value::Null) => Err(ValidationError::missing(path)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::not_a_string(path)),
    }
}

fn parse_user(body: &Map<String, Value>) -> Result<UserEvent, ValidationError> {
    let username = require_str(body, "event", "username")?;
    let email = require_str(body, "event", "email")?;
    let operation = require_str(body, "event", "operation")?;

    if !email.validate_email() {
        return Err(ValidationError::new(
            "event.email",
            ValidationErrorKind::InvalidEmail,
            "value is not a valid email address",
        ));
    }

    Ok(UserEvent {
        username: username.to_string(),
        email: email.to_string(),
        operation: operation.to_string(),
    })
}

fn parse_system(body: &Map<String, Value>) -> Result<SystemEvent, ValidationError> {
    let system_id = require_str(body, "event", "system_id")?;
    let location = require_str(body, "event", "location")?;
    let operation = require_str(body, "event", "operation")?;

    // check_location already ran, but keep the parse total
    let location = Location::parse(location).ok_or_else(|| {
        ValidationError::new(
            "event.location",
            ValidationErrorKind::InvalidLocation,
            "Input should be 'europe' or 'us'",
        )
    })?;

    Ok(SystemEvent {
        system_id: system_id.to_string(),
        location,
        operation: operation.to_string(),
    })
}
