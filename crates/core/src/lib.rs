//! # Wayfarer Core
//!
//! Domain types, traits, and error definitions for the Wayfarer chat service.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external capability (pattern matching, weather lookup, generative
//! text, transcript persistence) is defined as a trait here. Implementations
//! live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod generative;
pub mod rule;
pub mod transcript;
pub mod weather;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result, RuleError, StorageError, WeatherError};
pub use generative::Generative;
pub use rule::{IntentAction, IntentRule, PatternMatcher, Responder, RuleMatch, RuleTable};
pub use transcript::{TranscriptEntry, TranscriptStore};
pub use weather::{WeatherReport, WeatherSource};
