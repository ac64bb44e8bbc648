//! Reason codes for rejected records
//!
//! Clients only ever see a small vocabulary: `invalid_timestamp`,
//! `invalid_location`, or the raw validation message for anything else.

use crate::schema::{ValidationError, ValidationErrorKind};

/// Machine-readable classification of a validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonCode {
    InvalidTimestamp,
    InvalidLocation,
    /// Any other failure, carrying the validator's message verbatim
    Other(String),
}

impl ReasonCode {
    pub fn as_str(&self) -> &str {
        match self {
            ReasonCode::InvalidTimestamp => "invalid_timestamp",
            ReasonCode::InvalidLocation => "invalid_location",
            ReasonCode::Other(message) => message,
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ReasonCode> for String {
    fn from(code: ReasonCode) -> Self {
        match code {
            ReasonCode::Other(message) => message,
            other => other.as_str().to_string(),
        }
    }
}

/// Classify a validation failure by its kind and field path
pub fn classify(err: &ValidationError) -> ReasonCode {
    match err.kind {
        ValidationErrorKind::InvalidTimestamp => ReasonCode::InvalidTimestamp,
        ValidationErrorKind::InvalidLocation => ReasonCode::InvalidLocation,
        _ => ReasonCode::Other(err.to_string()),
    }
}
