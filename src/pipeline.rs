//! Batch insert pipeline
//!
//! Validates every record of a batch independently, reports one
//! `InsertResult` per record in submission order, and archives all accepted
//! envelopes with a single append.

use crate::archive::ArchiveStore;
use crate::classify::classify;
use crate::error::{EventLogError, Result};
use crate::schema;
use crate::types::{EventEnvelope, InsertResult};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

/// Default upper bound on records per batch
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

pub struct InsertPipeline {
    store: Arc<dyn ArchiveStore>,
    max_batch_size: usize,
}

impl InsertPipeline {
    /// Create a pipeline with the default batch limit
    pub fn new(store: Arc<dyn ArchiveStore>) -> Self {
        Self::with_max_batch_size(store, DEFAULT_MAX_BATCH_SIZE)
    }

    pub fn with_max_batch_size(store: Arc<dyn ArchiveStore>, max_batch_size: usize) -> Self {
        Self {
            store,
            max_batch_size,
        }
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Validate and archive a batch of raw records
    ///
    /// Oversized batches fail with `BatchTooLarge` before anything is
    /// validated or written. Otherwise every record gets a result, and
    /// archive failures propagate as errors.
    pub async fn insert(&self, records: Vec<Value>) -> Result<Vec<InsertResult>> {
        if records.len() > self.max_batch_size {
            return Err(EventLogError::BatchTooLarge {
                size: records.len(),
                max: self.max_batch_size,
            });
        }

        // One reference instant for the whole batch
        let now = Utc::now();
        let mut results = Vec::with_capacity(records.len());
        let mut accepted: Vec<EventEnvelope> = Vec::new();

        for raw in &records {
            match schema::validate(raw, now) {
                Ok(envelope) => {
                    results.push(InsertResult::accepted(envelope.event_id.clone()));
                    accepted.push(envelope);
                }
                Err(err) => {
                    let event_id = event_id_hint(raw);
                    let reason = classify(&err);
                    tracing::debug!(
                        event_id = %event_id,
                        field = %err.field,
                        reason = %reason,
                        "Record rejected"
                    );
                    results.push(InsertResult::rejected(event_id, reason));
                }
            }
        }

        let accepted_count = accepted.len();
        if !accepted.is_empty() {
            self.store.append_all(accepted).await?;
        }

        tracing::info!(
            store = self.store.name(),
            accepted = accepted_count,
            rejected = results.len() - accepted_count,
            "Batch processed"
        );

        Ok(results)
    }
}

/// Best-effort `event_id` of a record that failed validation
fn event_id_hint(raw: &Value) -> String {
    raw.get("event_id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
