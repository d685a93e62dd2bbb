//! Built-in intent actions.
//!
//! Actions own their failure handling: any provider fault is converted to a
//! degraded human-readable string before it can reach the dispatcher.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use wayfarer_core::rule::{IntentAction, RuleMatch};
use wayfarer_core::weather::WeatherSource;

/// Degraded reply when the weather lookup cannot be completed.
pub const WEATHER_UNAVAILABLE: &str = "Unable to fetch weather data at the moment.";

/// Answers weather and forecast intents with a live lookup.
///
/// Expects the matched pattern to capture the city name as its first group.
pub struct WeatherAction {
    source: Arc<dyn WeatherSource>,
}

impl WeatherAction {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl IntentAction for WeatherAction {
    async fn run(&self, found: &RuleMatch) -> String {
        let city = found.capture(0).map(str::trim).filter(|c| !c.is_empty());

        let Some(city) = city else {
            warn!(message = %found.message, "Weather rule matched without a city capture");
            return WEATHER_UNAVAILABLE.to_string();
        };

        match self.source.current(city).await {
            Ok(report) => report.to_string(),
            Err(e) => {
                warn!(city, source = self.source.name(), error = %e, "Weather lookup failed");
                WEATHER_UNAVAILABLE.to_string()
            }
        }
    }
}
