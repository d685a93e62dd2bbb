//! No-op transcript store — disables persistence entirely.

use async_trait::async_trait;
use wayfarer_core::error::StorageError;
use wayfarer_core::transcript::{TranscriptEntry, TranscriptStore};

/// A no-op store that keeps nothing.
pub struct NoopStore;

#[async_trait]
impl TranscriptStore for NoopStore {
    fn name(&self) -> &str {
        "none"
    }

    async fn record(&self, _entry: TranscriptEntry) -> Result<(), StorageError> {
        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(0)
    }
}
