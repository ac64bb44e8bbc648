//! Event log service built on a pluggable archive store
//!
//! `EventLogService` is the single entry point used by the HTTP API and the
//! CLI: bounded reads, lookup by id, and batch inserts.

use crate::archive::ArchiveStore;
use crate::error::Result;
use crate::pipeline::InsertPipeline;
use crate::types::{EventEnvelope, InsertResult};
use serde_json::Value;
use std::sync::Arc;

pub struct EventLogService {
    store: Arc<dyn ArchiveStore>,
    pipeline: InsertPipeline,
}

impl EventLogService {
    /// Create a service over `store` with the default batch limit
    pub fn new(store: Arc<dyn ArchiveStore>) -> Self {
        Self {
            pipeline: InsertPipeline::new(store.clone()),
            store,
        }
    }

    /// Create a service with a custom batch limit
    pub fn with_max_batch_size(store: Arc<dyn ArchiveStore>, max_batch_size: usize) -> Self {
        Self {
            pipeline: InsertPipeline::with_max_batch_size(store.clone(), max_batch_size),
            store,
        }
    }

    /// Get the backend name
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &dyn ArchiveStore {
        self.store.as_ref()
    }

    pub fn max_batch_size(&self) -> usize {
        self.pipeline.max_batch_size()
    }

    /// Return up to `size` archived events in stored order
    pub async fn return_logs(&self, size: usize) -> Result<Vec<EventEnvelope>> {
        self.store.load_bounded(size).await
    }

    /// Return the first archived event with `event_id`
    pub async fn return_log(&self, event_id: &str) -> Result<EventEnvelope> {
        self.store.find_by_id(event_id).await
    }

    /// Validate and archive a batch of raw records
    pub async fn insert_logs(&self, records: Vec<Value>) -> Result<Vec<InsertResult>> {
        self.pipeline.insert(records).await
    }
}
