//! `wayfarer doctor` — Diagnose configuration and storage health.

use wayfarer_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Wayfarer Doctor — System Diagnostics");
    println!("=======================================\n");

    let mut issues = 0;

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Configuration loaded");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            return Ok(());
        }
    };

    if config.weather.api_key.is_some() {
        println!("  ✅ Weather API key configured");
    } else {
        println!("  ⚠️  No weather API key — set WEATHER_API_KEY; weather intents will degrade");
        issues += 1;
    }

    if config.generative.api_key.is_some() {
        println!("  ✅ Generative API key configured");
    } else {
        println!("  ⚠️  No generative API key — set GOOGLE_API_KEY; fallback replies will degrade");
        issues += 1;
    }

    match wayfarer_storage::open(&config.storage.backend, &config.storage.path).await {
        Ok(store) => match store.count().await {
            Ok(count) => {
                println!(
                    "  ✅ Transcript store '{}' reachable ({count} records)",
                    store.name()
                );
            }
            Err(e) => {
                println!("  ❌ Transcript store query failed: {e}");
                issues += 1;
            }
        },
        Err(e) => {
            println!("  ❌ Transcript store unavailable: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
