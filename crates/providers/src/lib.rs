//! Outbound provider clients for Wayfarer.
//!
//! Both external services are consumed through narrow traits defined in
//! `wayfarer-core`; these are the production HTTP implementations.

pub mod gemini;
pub mod weather;

pub use gemini::GeminiClient;
pub use weather::OpenWeatherClient;
