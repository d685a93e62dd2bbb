//! Transcript recorder — fire-and-forget persistence of chat exchanges.
//!
//! Writes go through a bounded mpsc queue to a background task, so a slow or
//! failed store can never delay or break the reply path. A full queue drops
//! the record with a warning; chat continuity wins over audit completeness.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use wayfarer_core::transcript::{TranscriptEntry, TranscriptStore};

const QUEUE_CAPACITY: usize = 256;

/// Queues (input, reply) pairs for background persistence.
pub struct TranscriptRecorder {
    tx: mpsc::Sender<TranscriptEntry>,
    writer: tokio::task::JoinHandle<()>,
}

impl TranscriptRecorder {
    /// Spawn the background writer task over the given store.
    pub fn spawn(store: Arc<dyn TranscriptStore>) -> Self {
        let (tx, mut rx) = mpsc::channel::<TranscriptEntry>(QUEUE_CAPACITY);

        let writer = tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                if let Err(e) = store.record(entry).await {
                    warn!(store = store.name(), error = %e, "Transcript write failed — record dropped");
                }
            }
            debug!("Transcript writer drained and stopped");
        });

        Self { tx, writer }
    }

    /// Queue one exchange. Never blocks and never fails the caller.
    pub fn record(&self, user_message: &str, bot_reply: &str) {
        let entry = TranscriptEntry::new(user_message, bot_reply);
        if let Err(e) = self.tx.try_send(entry) {
            warn!(error = %e, "Transcript queue full — record dropped");
        }
    }

    /// Close the queue and wait for queued writes to land.
    ///
    /// Used on graceful shutdown and by tests that assert on persisted state.
    pub async fn close(self) {
        drop(self.tx);
        let _ = self.writer.await;
    }
}
