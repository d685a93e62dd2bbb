//! Dispatcher — one message in, one reply out.
//!
//! A single linear scan over the rule table with early exit: the first
//! pattern of the first matching rule decides the path. Static replies
//! return without suspension; actions and the fallback are awaited. Every
//! completed exchange is queued to the transcript recorder after the reply
//! exists, so persistence can never change or delay what the caller gets.

use tracing::debug;
use wayfarer_core::rule::{Responder, RuleTable};

use crate::fallback::FallbackResolver;
use crate::recorder::TranscriptRecorder;

/// The dispatch engine. Stateless across requests; safe to share via `Arc`.
pub struct Dispatcher {
    table: RuleTable,
    fallback: FallbackResolver,
    recorder: TranscriptRecorder,
}

impl Dispatcher {
    pub fn new(table: RuleTable, fallback: FallbackResolver, recorder: TranscriptRecorder) -> Self {
        Self {
            table,
            fallback,
            recorder,
        }
    }

    /// Turn one input message into one reply string.
    ///
    /// Infallible by construction: every expected failure mode has already
    /// been converted to a valid reply string below this boundary. The
    /// caller validates that `message` is non-empty before invoking.
    pub async fn dispatch(&self, message: &str) -> String {
        let reply = match self.table.find(message) {
            Some((rule, found)) => {
                debug!(category = %rule.category, "Intent matched");
                match &rule.responder {
                    Responder::Static(text) => text.clone(),
                    Responder::Action(action) => action.run(&found).await,
                }
            }
            None => {
                debug!("No intent matched — delegating to generative fallback");
                self.fallback.resolve(message).await
            }
        };

        self.recorder.record(message, &reply);
        reply
    }

    /// Category labels of the rule table, in priority order.
    pub fn categories(&self) -> Vec<&str> {
        self.table.categories()
    }

    /// Stop accepting work and wait for queued transcript writes to land.
    pub async fn shutdown(self) {
        self.recorder.close().await;
    }
}
