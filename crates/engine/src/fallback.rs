//! Fallback resolver — the catch-all path when no intent rule matches.
//!
//! Delegates to a generative-text provider and normalizes every failure mode
//! into a fixed apology string. Nothing raises past this boundary.

use std::sync::Arc;
use tracing::warn;
use wayfarer_core::generative::Generative;

/// Fixed safe reply when the generative provider cannot answer.
pub const FALLBACK_APOLOGY: &str = "Sorry, I'm unable to respond right now.";

/// Resolves unmatched messages through a generative provider.
pub struct FallbackResolver {
    provider: Arc<dyn Generative>,
}

impl FallbackResolver {
    pub fn new(provider: Arc<dyn Generative>) -> Self {
        Self { provider }
    }

    /// Produce a reply for a message no rule matched.
    ///
    /// Never fails: network errors, malformed responses, and missing
    /// credentials all degrade to [`FALLBACK_APOLOGY`].
    pub async fn resolve(&self, message: &str) -> String {
        match self.provider.generate(message).await {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                warn!(provider = self.provider.name(), "Generative provider returned an empty reply");
                FALLBACK_APOLOGY.to_string()
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Generative fallback failed");
                FALLBACK_APOLOGY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use wayfarer_core::error::ProviderError;

    /// A mock provider that always succeeds.
    struct SuccessProvider {
        call_count: Mutex<usize>,
    }

    impl SuccessProvider {
        fn new() -> Self {
            Self {
                call_count: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl Generative for SuccessProvider {
        fn name(&self) -> &str {
            "success"
        }

        async fn generate(&self, message: &str) -> Result<String, ProviderError> {
            *self.call_count.lock().unwrap() += 1;
            Ok(format!("generated: {message}"))
        }
    }

    /// A mock provider that always fails.
    struct FailingProvider {
        error: ProviderError,
    }

    #[async_trait]
    impl Generative for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _message: &str) -> Result<String, ProviderError> {
            Err(self.error.clone())
        }
    }

    /// A mock provider that returns whitespace.
    struct BlankProvider;

    #[async_trait]
    impl Generative for BlankProvider {
        fn name(&self) -> &str {
            "blank"
        }

        async fn generate(&self, _message: &str) -> Result<String, ProviderError> {
            Ok("   ".into())
        }
    }

    #[tokio::test]
    async fn passes_through_provider_reply() {
        let provider = Arc::new(SuccessProvider::new());
        let resolver = FallbackResolver::new(provider.clone());

        let reply = resolver.resolve("tell me a joke").await;
        assert_eq!(reply, "generated: tell me a joke");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn network_failure_degrades_to_apology() {
        let resolver = FallbackResolver::new(Arc::new(FailingProvider {
            error: ProviderError::Network("dns failure".into()),
        }));
        assert_eq!(resolver.resolve("hello?").await, FALLBACK_APOLOGY);
    }

    #[tokio::test]
    async fn missing_credentials_degrade_to_apology() {
        let resolver = FallbackResolver::new(Arc::new(FailingProvider {
            error: ProviderError::NotConfigured("GOOGLE_API_KEY is not set".into()),
        }));
        assert_eq!(resolver.resolve("hello?").await, FALLBACK_APOLOGY);
    }

    #[tokio::test]
    async fn blank_reply_degrades_to_apology() {
        let resolver = FallbackResolver::new(Arc::new(BlankProvider));
        assert_eq!(resolver.resolve("hello?").await, FALLBACK_APOLOGY);
    }
}
