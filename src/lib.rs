//! # a3s-eventlog
//!
//! Validated, append-only event log archival for the A3S ecosystem.
//!
//! ## Overview
//!
//! `a3s-eventlog` ingests user and system event records, validates each one
//! against a typed schema, archives the accepted ones in insertion order, and
//! serves bounded reads by count or by id. Swap storage backends (JSON file,
//! in-memory) without changing application code.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use a3s_eventlog::{EventLogService, MemoryArchiveStore};
//!
//! # async fn example() -> a3s_eventlog::Result<()> {
//! let service = EventLogService::new(Arc::new(MemoryArchiveStore::new()));
//!
//! let results = service
//!     .insert_logs(vec![serde_json::json!({
//!         "type": "system",
//!         "timestamp": "2006-01-13T00:00:00Z",
//!         "event_id": "s_123",
//!         "event": {"system_id": "id_123", "location": "europe", "operation": "read"},
//!     })])
//!     .await?;
//! assert!(results[0].success);
//!
//! let event = service.return_log("s_123").await?;
//! println!("Archived: {}", event.event_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **schema** — raw JSON → `EventEnvelope`, with structured errors
//! - **classify** — validation errors → reason codes (`invalid_timestamp`, ...)
//! - **ArchiveStore** trait — persistence abstraction all backends implement
//! - **InsertPipeline** — partial-success batch insertion
//! - **EventLogService** — façade used by the HTTP API and CLI

pub mod api;
pub mod archive;
pub mod classify;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod pipeline;
pub mod schema;
pub mod server;
pub mod service;
pub mod types;

// Re-export core types
pub use archive::{ArchiveStore, FileArchiveStore, MemoryArchiveStore};
pub use classify::{classify, ReasonCode};
pub use config::EventLogConfig;
pub use error::{EventLogError, Result};
pub use pipeline::InsertPipeline;
pub use schema::{validate, validate_now, ValidationError, ValidationErrorKind};
pub use service::EventLogService;
pub use types::{
    EventEnvelope, EventKind, EventPayload, InsertResult, Location, SystemEvent, UserEvent,
};
