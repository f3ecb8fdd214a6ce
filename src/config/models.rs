//! Configuration data models
//!
//! This module defines the data structures persisted between sessions.

use serde::{Deserialize, Serialize};

/// Persisted timer settings
///
/// Holds the last-used countdown duration and the float-window flag. Minutes
/// and seconds are kept in 0..=59 by UI convention only; nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Hours component of the countdown duration
    pub hours: u32,
    /// Minutes component of the countdown duration
    pub minutes: u32,
    /// Seconds component of the countdown duration
    pub seconds: u32,
    /// Whether the window floats above all other windows and workspaces
    pub float_window: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 2,
            seconds: 0,
            float_window: false,
        }
    }
}
