//! Archive store trait — the persistence abstraction for accepted events
//!
//! Every backend (JSON file, in-memory, or anything else) implements
//! `ArchiveStore` so the insert pipeline and query service never depend on
//! how envelopes are stored.

use crate::error::{EventLogError, Result};
use crate::types::EventEnvelope;
use async_trait::async_trait;

pub mod file;
pub mod memory;

pub use file::FileArchiveStore;
pub use memory::MemoryArchiveStore;

/// Ordered, append-only storage of accepted event envelopes
///
/// Insertion order is preserved. `event_id` is not a key: duplicates are
/// stored as-is and lookups return the first match.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Load every archived envelope in stored order
    ///
    /// Fails with `StoreUnavailable` if the archive is missing, corrupt, or
    /// unreadable.
    async fn load_all(&self) -> Result<Vec<EventEnvelope>>;

    /// Append envelopes after the existing ones, preserving their order
    async fn append_all(&self, records: Vec<EventEnvelope>) -> Result<()>;

    /// Backend name (e.g., "file", "memory")
    fn name(&self) -> &str;

    /// Load at most `limit` envelopes from the start of the archive
    ///
    /// Short archives return everything they hold; this never errors on
    /// `limit` exceeding the stored count.
    async fn load_bounded(&self, limit: usize) -> Result<Vec<EventEnvelope>> {
        let mut records = self.load_all().await?;
        records.truncate(limit);
        Ok(records)
    }

    /// Find the first envelope whose `event_id` matches
    async fn find_by_id(&self, event_id: &str) -> Result<EventEnvelope> {
        self.load_all()
            .await?
            .into_iter()
            .find(|e| e.event_id == event_id)
            .ok_or_else(|| EventLogError::NotFound(event_id.to_string()))
    }

    /// Number of archived envelopes
    async fn count(&self) -> Result<usize> {
        self.load_all().await.map(|records| records.len())
    }
}
