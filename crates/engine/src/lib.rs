//! Intent classification and dispatch engine for Wayfarer.
//!
//! One linear scan over an ordered rule table decides how a message is
//! answered: a static reply, an awaited action (weather lookup), or the
//! generative fallback. Every completed exchange is queued to a background
//! transcript writer. The whole pipeline always produces *some* reply —
//! expected failures are absorbed where they happen and degrade to safe
//! strings, never to raised faults.

pub mod actions;
pub mod dispatcher;
pub mod fallback;
pub mod pattern;
pub mod recorder;
pub mod table;

pub use actions::WeatherAction;
pub use dispatcher::Dispatcher;
pub use fallback::{FALLBACK_APOLOGY, FallbackResolver};
pub use pattern::RegexPattern;
pub use recorder::TranscriptRecorder;
pub use table::travel_rules;
