//! Audio cue module
//!
//! Provides the countdown-completion chime. The sound is synthesized at
//! startup rather than loaded from a bundled asset, so the only failure
//! mode is an unavailable output device.

pub mod chime;

pub use chime::ChimePlayer;
