//! `wayfarer chat` — Dispatch a single message and print the reply.

use wayfarer_config::AppConfig;

use crate::wiring;

pub async fn run(message: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let dispatcher = wiring::build_dispatcher(&config).await?;
    let reply = dispatcher.dispatch(&message).await;

    // Flush the queued transcript write before the process exits.
    dispatcher.shutdown().await;

    println!("{reply}");
    Ok(())
}
