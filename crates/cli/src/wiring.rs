//! Shared wiring: config → providers → rule table → dispatcher.

use std::sync::Arc;
use wayfarer_config::AppConfig;
use wayfarer_core::generative::Generative;
use wayfarer_core::weather::WeatherSource;
use wayfarer_engine::{Dispatcher, FallbackResolver, TranscriptRecorder, travel_rules};
use wayfarer_providers::{GeminiClient, OpenWeatherClient};

/// Build the production weather source from config.
pub fn weather_source(config: &AppConfig) -> Arc<dyn WeatherSource> {
    let mut client = OpenWeatherClient::new(config.weather.api_key.clone().unwrap_or_default())
        .with_units(config.weather.units.clone());
    if let Some(url) = &config.weather.base_url {
        client = client.with_base_url(url.clone());
    }
    Arc::new(client)
}

/// Build the production generative provider from config.
pub fn generative_provider(config: &AppConfig) -> Arc<dyn Generative> {
    let mut client = GeminiClient::new(config.generative.api_key.clone().unwrap_or_default())
        .with_model(config.generative.model.clone());
    if let Some(url) = &config.generative.base_url {
        client = client.with_base_url(url.clone());
    }
    Arc::new(client)
}

/// Assemble a dispatcher over the configured store and providers.
pub async fn build_dispatcher(config: &AppConfig) -> Result<Dispatcher, Box<dyn std::error::Error>> {
    let store = wayfarer_storage::open(&config.storage.backend, &config.storage.path).await?;

    let table = travel_rules(weather_source(config))?;
    let fallback = FallbackResolver::new(generative_provider(config));
    let recorder = TranscriptRecorder::spawn(store);

    Ok(Dispatcher::new(table, fallback, recorder))
}
