//! SQLite transcript store.
//!
//! A single database file with one append-only `transcripts` table, created
//! by a startup migration. WAL journal mode keeps concurrent appends cheap.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};
use wayfarer_core::error::StorageError;
use wayfarer_core::transcript::{TranscriptEntry, TranscriptStore};

/// A production SQLite transcript store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new SQLite store from a file path.
    ///
    /// The database and table are created automatically. Pass
    /// `"sqlite::memory:"` for an in-process ephemeral database (tests).
    pub async fn new(path: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(path)
            .map_err(|e| StorageError::Storage(format!("Invalid SQLite path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Storage(format!("Failed to open SQLite: {e}")))?;

        let store = Self { pool };
        store.run_migrations().await?;
        info!("SQLite transcript store initialized at {path}");
        Ok(store)
    }

    /// Run schema migrations.
    async fn run_migrations(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS transcripts (
                iid          INTEGER PRIMARY KEY AUTOINCREMENT,
                id           TEXT UNIQUE NOT NULL,
                user_message TEXT NOT NULL,
                bot_reply    TEXT NOT NULL,
                created_at   TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::MigrationFailed(format!("transcripts table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_transcripts_created_at ON transcripts(created_at DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::MigrationFailed(format!("created_at index: {e}")))?;

        debug!("SQLite migrations complete");
        Ok(())
    }
}

#[async_trait]
impl TranscriptStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn record(&self, entry: TranscriptEntry) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO transcripts (id, user_message, bot_reply, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&entry.id)
        .bind(&entry.user_message)
        .bind(&entry.bot_reply)
        .bind(entry.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::QueryFailed(format!("INSERT transcript: {e}")))?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM transcripts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::QueryFailed(format!("COUNT: {e}")))?;

        let cnt: i64 = row
            .try_get("cnt")
            .map_err(|e| StorageError::QueryFailed(format!("cnt column: {e}")))?;

        Ok(cnt as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_and_count_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcripts.db");
        let store = SqliteStore::new(path.to_str().unwrap()).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 0);

        store
            .record(TranscriptEntry::new("hi", "Hello there!"))
            .await
            .unwrap();
        store
            .record(TranscriptEntry::new("bye", "Goodbye!"))
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let store = SqliteStore::new("sqlite::memory:").await.unwrap();

        let entry = TranscriptEntry::new("hi", "Hello there!");
        store.record(entry.clone()).await.unwrap();

        let err = store.record(entry).await.unwrap_err();
        assert!(matches!(err, StorageError::QueryFailed(_)));
    }

    #[tokio::test]
    async fn reopening_keeps_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcripts.db");
        let path = path.to_str().unwrap();

        {
            let store = SqliteStore::new(path).await.unwrap();
            store
                .record(TranscriptEntry::new("hi", "Hello there!"))
                .await
                .unwrap();
        }

        let reopened = SqliteStore::new(path).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
    }
}
