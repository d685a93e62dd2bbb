//! In-memory transcript store — useful for testing and ephemeral runs.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use wayfarer_core::error::StorageError;
use wayfarer_core::transcript::{TranscriptEntry, TranscriptStore};

/// An in-memory store that appends entries to a Vec.
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<TranscriptEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of all stored entries, in insertion order.
    ///
    /// Only exists on this backend — tests use it to assert what the
    /// recorder actually persisted.
    pub async fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.read().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn record(&self, entry: TranscriptEntry) -> Result<(), StorageError> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.entries.read().await.len())
    }
}
