//! OpenWeatherMap client.
//!
//! Calls the current-weather endpoint (`/data/2.5/weather`) with metric
//! units and parses the result into a domain `WeatherReport`. The request
//! timeout is bounded so a slow provider cannot hang a dispatch.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use wayfarer_core::error::WeatherError;
use wayfarer_core::weather::{WeatherReport, WeatherSource};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_UNITS: &str = "metric";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// OpenWeatherMap current-weather provider.
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
    units: String,
    client: reqwest::Client,
}

impl OpenWeatherClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            units: DEFAULT_UNITS.into(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the units parameter ("metric" or "imperial").
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Convert the API response to a domain report.
    fn to_report(resp: CurrentWeatherResponse) -> Result<WeatherReport, WeatherError> {
        let description = resp
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or_else(|| {
                WeatherError::MalformedResponse("empty weather conditions array".into())
            })?;

        Ok(WeatherReport {
            city: resp.name,
            description,
            temperature_c: resp.main.temp,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    fn name(&self) -> &str {
        "openweathermap"
    }

    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::NotConfigured("WEATHER_API_KEY is not set".into()));
        }

        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!(city, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout(e.to_string())
                } else {
                    WeatherError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 401 {
            return Err(WeatherError::NotConfigured(
                "Invalid OpenWeatherMap API key".into(),
            ));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "OpenWeatherMap API error");
            return Err(WeatherError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_resp: CurrentWeatherResponse = response.json().await.map_err(|e| {
            WeatherError::MalformedResponse(format!("Failed to parse weather response: {e}"))
        })?;

        Self::to_report(api_resp)
    }
}

// --- OpenWeatherMap API types ---

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    weather: Vec<ApiCondition>,
    main: ApiMain,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor() {
        let client = OpenWeatherClient::new("owm-test-key");
        assert_eq!(client.name(), "openweathermap");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.units, "metric");
    }

    #[test]
    fn constructor_with_base_url() {
        let client = OpenWeatherClient::new("owm-test-key")
            .with_base_url("http://localhost:9001/");
        assert_eq!(client.base_url, "http://localhost:9001");
    }

    #[test]
    fn parse_current_weather() {
        let resp: CurrentWeatherResponse = serde_json::from_str(
            r#"{
                "name": "New York",
                "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
                "main": {"temp": 12.5, "feels_like": 11.2, "humidity": 81}
            }"#,
        )
        .unwrap();

        let report = OpenWeatherClient::to_report(resp).unwrap();
        assert_eq!(report.city, "New York");
        assert_eq!(report.description, "light rain");
        assert!((report.temperature_c - 12.5).abs() < f64::EPSILON);
        assert_eq!(
            report.to_string(),
            "Current weather in New York: light rain, temperature: 12.5°C"
        );
    }

    #[test]
    fn empty_conditions_is_malformed() {
        let resp: CurrentWeatherResponse = serde_json::from_str(
            r#"{"name": "Nowhere", "weather": [], "main": {"temp": 0.0}}"#,
        )
        .unwrap();

        let err = OpenWeatherClient::to_report(resp).unwrap_err();
        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn missing_api_key_is_not_configured() {
        let client = OpenWeatherClient::new("");
        let err = client.current("Rome").await.unwrap_err();
        assert!(matches!(err, WeatherError::NotConfigured(_)));
    }
}
