//! Transcript trait — append-only persistence of chat exchanges.
//!
//! One entry per completed dispatch. Records are an audit trail for external
//! analytics tooling: the dispatch engine writes them and never reads them
//! back. Chat continuity must not depend on storage availability, so callers
//! treat failures as log-and-continue.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::error::StorageError;

/// One persisted (input, reply) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Unique entry ID
    pub id: String,

    /// What the user sent
    pub user_message: String,

    /// What the bot replied
    pub bot_reply: String,

    /// When the dispatch completed
    pub created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn new(user_message: impl Into<String>, bot_reply: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_message: user_message.into(),
            bot_reply: bot_reply.into(),
            created_at: Utc::now(),
        }
    }
}

/// The core transcript store trait.
///
/// Implementations: SQLite (production), in-memory (tests), no-op (disabled).
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// The backend name (e.g., "sqlite", "memory", "none").
    fn name(&self) -> &str;

    /// Append one entry. Append-only — there is no update or delete path.
    async fn record(&self, entry: TranscriptEntry) -> std::result::Result<(), StorageError>;

    /// Total number of stored entries, for diagnostics.
    async fn count(&self) -> std::result::Result<usize, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_gets_id_and_timestamp() {
        let entry = TranscriptEntry::new("hi", "Hello there!");
        assert!(!entry.id.is_empty());
        assert_eq!(entry.user_message, "hi");
        assert_eq!(entry.bot_reply, "Hello there!");
    }

    #[test]
    fn entry_serialization() {
        let entry = TranscriptEntry::new("weather in Oslo", "Current weather in Oslo: snow, temperature: -3°C");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("weather in Oslo"));
        assert!(json.contains("created_at"));
    }
}
