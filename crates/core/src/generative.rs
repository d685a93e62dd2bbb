//! Generative trait — the abstraction over generative-text backends.
//!
//! Used only on the fallback path, when no intent rule matches. The remote
//! call is opaque: unspecified latency, arbitrary failure modes. Callers are
//! expected to convert any error into a safe reply (see the fallback
//! resolver in `wayfarer-engine`).

use async_trait::async_trait;
use crate::error::ProviderError;

/// A generative-text capability.
///
/// Implementations: Gemini (production), mocks (tests).
#[async_trait]
pub trait Generative: Send + Sync {
    /// A human-readable name for this provider (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate a free-form reply to the given message.
    async fn generate(&self, message: &str) -> std::result::Result<String, ProviderError>;
}
