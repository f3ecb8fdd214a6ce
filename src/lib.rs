//! `Tickdown` - a single-window desktop countdown timer
//!
//! The user sets hours, minutes, and seconds via steppers or free-text
//! fields, starts/pauses/resets a one-second-tick countdown, and on reaching
//! zero hears a chime and sees the window background flash. The window can
//! optionally float above all other windows and workspaces, and the
//! last-used duration persists across restarts.
//!
//! The library holds everything that runs without a window: the
//! `TimerController` state machine, settings persistence, the audio cue, and
//! logging. The Slint GUI lives in the binary.

// Module declarations
pub mod audio;
pub mod config;
pub mod error;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, TickdownError};
