//! JSON file archive
//!
//! The whole archive is one JSON array on disk. Reads reload the file every
//! time; appends rewrite it through a temp file + rename so readers never
//! observe a partial write.

use super::ArchiveStore;
use crate::error::{EventLogError, Result};
use crate::types::EventEnvelope;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// File-backed archive store
///
/// Appends within one process are serialized by an internal mutex, so two
/// concurrent `append_all` calls cannot both read the same prior state and
/// drop each other's records. Writers in other processes are not
/// coordinated.
pub struct FileArchiveStore {
    path: PathBuf,

    /// Held for the full read-modify-write of an append
    write_lock: Mutex<()>,
}

impl FileArchiveStore {
    /// Create a store over `path` without touching the filesystem
    ///
    /// Reads fail with `StoreUnavailable` until the file exists.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store over `path`, initializing an empty archive if absent
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);

        let exists = tokio::fs::try_exists(&store.path).await.map_err(|e| {
            EventLogError::StoreUnavailable(format!(
                "Failed to stat archive {}: {}",
                store.path.display(),
                e
            ))
        })?;

        if !exists {
            store.write(&[]).await?;
            tracing::info!(path = %store.path.display(), "Created empty archive");
        }

        Ok(store)
    }

    /// Get the archive file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<EventEnvelope>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            EventLogError::StoreUnavailable(format!(
                "Failed to read archive {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let records: Vec<EventEnvelope> = serde_json::from_slice(&bytes).map_err(|e| {
            EventLogError::StoreUnavailable(format!(
                "Failed to parse archive {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Archive loaded"
        );
        Ok(records)
    }

    async fn write(&self, records: &[EventEnvelope]) -> Result<()> {
        let json = serde_json::to_vec(records).map_err(|e| {
            EventLogError::StoreUnavailable(format!("Failed to serialize archive: {}", e))
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                EventLogError::StoreUnavailable(format!(
                    "Failed to create archive directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("tmp");

        tokio::fs::write(&tmp_path, json).await.map_err(|e| {
            EventLogError::StoreUnavailable(format!(
                "Failed to write archive file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            EventLogError::StoreUnavailable(format!(
                "Failed to rename archive file {} → {}: {}",
                tmp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Archive saved"
        );
        Ok(())
    }
}

#[async_trait]
impl ArchiveStore for FileArchiveStore {
    async fn load_all(&self) -> Result<Vec<EventEnvelope>> {
        self.read().await
    }

    async fn append_all(&self, records: Vec<EventEnvelope>) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut archive = self.read().await?;
        archive.extend(records);
        self.write(&archive).await
    }

    fn name(&self) -> &str {
        "file"
    }
}
