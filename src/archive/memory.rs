//! In-memory archive store for testing and embedding
//!
//! Stores envelopes in a `Vec` — lost on drop.

use super::ArchiveStore;
use crate::error::Result;
use crate::types::EventEnvelope;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryArchiveStore {
    records: RwLock<Vec<EventEnvelope>>,
}

impl MemoryArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`
    pub fn with_records(records: Vec<EventEnvelope>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl ArchiveStore for MemoryArchiveStore {
    async fn load_all(&self) -> Result<Vec<EventEnvelope>> {
        Ok(self.records.read().await.clone())
    }

    async fn append_all(&self, records: Vec<EventEnvelope>) -> Result<()> {
        self.records.write().await.extend(records);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }

    async fn load_bounded(&self, limit: usize) -> Result<Vec<EventEnvelope>> {
        let records = self.records.read().await;
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}
