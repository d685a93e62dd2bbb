//! `wayfarer serve` — Start the HTTP chat server.

use std::sync::Arc;
use wayfarer_config::AppConfig;

use crate::wiring;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load()?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("🧭 Wayfarer");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Allowed origin: {}", config.gateway.allowed_origin);
    println!("   Transcript store: {}", config.storage.backend);

    let dispatcher = Arc::new(wiring::build_dispatcher(&config).await?);

    wayfarer_gateway::start(
        &config.gateway.host,
        config.gateway.port,
        &config.gateway.allowed_origin,
        dispatcher,
    )
    .await?;

    Ok(())
}
