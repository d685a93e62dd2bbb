//! Configuration loading and validation for Wayfarer.
//!
//! Loads `wayfarer.toml` (path overridable via `WAYFARER_CONFIG`) with
//! environment variable overrides for everything a deployment needs to set:
//! API keys, listen address, allowed CORS origin, and the database path.
//! A missing file is not an error — the original deployment was env-only.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The root configuration structure.
///
/// Maps directly to `wayfarer.toml`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Generative fallback provider configuration
    #[serde(default)]
    pub generative: GenerativeConfig,

    /// Transcript storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("gateway", &self.gateway)
            .field("weather", &self.weather)
            .field("generative", &self.generative)
            .field("storage", &self.storage)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration: file (if present) plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("WAYFARER_CONFIG").unwrap_or_else(|_| "wayfarer.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_path(&path)?
        } else {
            debug!(path = %path, "No config file — using defaults plus environment");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a config file without environment overrides.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path_str,
            source: e,
        })
    }

    /// Apply process-environment overrides on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Override from any name → value lookup. Split out so tests can inject
    /// an environment without mutating the process.
    fn apply_env_from(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(key) = get("WEATHER_API_KEY") {
            self.weather.api_key = Some(key);
        }
        if let Some(key) = get("GOOGLE_API_KEY") {
            self.generative.api_key = Some(key);
        }
        if let Some(host) = get("WAYFARER_HOST") {
            self.gateway.host = host;
        }
        if let Some(port) = get("WAYFARER_PORT") {
            match port.parse() {
                Ok(p) => self.gateway.port = p,
                Err(_) => warn!(value = %port, "Ignoring unparseable WAYFARER_PORT"),
            }
        }
        if let Some(origin) = get("WAYFARER_ALLOWED_ORIGIN") {
            self.gateway.allowed_origin = origin;
        }
        if let Some(path) = get("WAYFARER_DB_PATH") {
            self.storage.path = path;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed to call the chat API from a browser.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    3000
}
fn default_allowed_origin() -> String {
    "http://localhost:5173".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_units")]
    pub units: String,
}

fn default_units() -> String {
    "metric".into()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            units: default_units(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GenerativeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "gemini-2.0-flash-exp".into()
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
        }
    }
}

impl std::fmt::Debug for GenerativeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: String,

    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_backend() -> String {
    "sqlite".into()
}
fn default_db_path() -> String {
    "wayfarer.db".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_db_path(),
        }
    }
}
