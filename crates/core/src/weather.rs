//! Weather trait — the abstraction over live weather lookups.
//!
//! A `WeatherSource` resolves a city name to a current-conditions report.
//! The wire format of the underlying provider is its own concern; the domain
//! only sees the parsed report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::error::WeatherError;

/// Current conditions for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name as resolved by the provider (may differ in casing from the query)
    pub city: String,

    /// One-line conditions description (e.g., "light rain")
    pub description: String,

    /// Temperature in degrees Celsius
    pub temperature_c: f64,
}

impl std::fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current weather in {}: {}, temperature: {}°C",
            self.city, self.description, self.temperature_c
        )
    }
}

/// The core weather lookup trait.
///
/// Implementations: OpenWeatherMap (production), mocks (tests).
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// A human-readable name for this source (e.g., "openweathermap").
    fn name(&self) -> &str;

    /// Look up current conditions for a city.
    async fn current(&self, city: &str) -> std::result::Result<WeatherReport, WeatherError>;
}
