//! Transcript persistence backends for Wayfarer.
//!
//! All backends implement `wayfarer_core::TranscriptStore`. The store is
//! append-only from the engine's perspective: records are an audit trail for
//! external analytics, never read back by the dispatch path.

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub mod memory;
pub mod noop;

use std::sync::Arc;
use wayfarer_core::error::StorageError;
use wayfarer_core::transcript::TranscriptStore;

pub use memory::MemoryStore;
pub use noop::NoopStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Open a transcript store by backend name.
///
/// Recognized backends: `"sqlite"` (requires the `sqlite` feature),
/// `"memory"`, `"none"`. Unknown names are a configuration error.
pub async fn open(backend: &str, path: &str) -> Result<Arc<dyn TranscriptStore>, StorageError> {
    match backend {
        #[cfg(feature = "sqlite")]
        "sqlite" => Ok(Arc::new(SqliteStore::new(path).await?)),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "none" => Ok(Arc::new(NoopStore)),
        other => Err(StorageError::Storage(format!(
            "Unknown storage backend: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_selects_backend_by_name() {
        let store = open("memory", "").await.unwrap();
        assert_eq!(store.name(), "memory");

        let store = open("none", "").await.unwrap();
        assert_eq!(store.name(), "none");
    }

    #[tokio::test]
    async fn open_rejects_unknown_backend() {
        assert!(open("mongodb", "").await.is_err());
    }
}
