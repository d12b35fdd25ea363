//! Read-aloud support: a speech-engine abstraction over the system TTS
//! and a playback controller that owns all playback state.

pub mod controller;
pub mod engine;
pub mod error;
pub mod script;

pub use controller::PlaybackController;
pub use engine::{SpeechEngine, SystemEngine};
pub use error::SpeechError;
pub use script::compose_script;
