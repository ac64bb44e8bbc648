//! HTTP API
//!
//! - `GET  /v1/events/all?size=N` - first N archived events (default 10, max 1000)
//! - `GET  /v1/events/get/:event_id` - single archived event
//! - `POST /v1/events/insert` - validate and archive a batch of events

pub mod events;
