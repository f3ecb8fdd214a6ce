//! Error types for the `Tickdown` application
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the `Tickdown` application
#[derive(Debug, Error)]
pub enum TickdownError {
    /// The audio output device could not be opened, so the completion chime
    /// cannot be played. The caller decides whether to run without it.
    #[error("Audio cue unavailable: {0}")]
    AudioUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration or logging setup error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Windowing backend error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Windowing error: {0}")]
    WindowingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `Tickdown` operations
pub type Result<T> = std::result::Result<T, TickdownError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `TickdownError` and returns a message suitable
/// for displaying to end users.
pub fn get_user_friendly_error(error: &TickdownError) -> String {
    match error {
        TickdownError::AudioUnavailable(_) => "The completion chime could not be set up.\n\n\
             The timer will still run, but it will finish silently.\n\
             Check that an audio output device is available."
            .to_string(),
        TickdownError::ConfigError(_) => "Failed to load or save the timer settings.\n\n\
             Your last-used duration may not persist.\n\
             Check that you have write permissions to the application's\n\
             configuration directory."
            .to_string(),
        TickdownError::WindowingError(e) => {
            format!(
                "The timer window could not be created:\n\n{e}\n\n\
                 Please ensure a display server is running."
            )
        }
        TickdownError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        TickdownError::JsonError(e) => {
            format!(
                "The settings file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TickdownError::AudioUnavailable(StringError::new("no output device"));
        assert_eq!(error.to_string(), "Audio cue unavailable: no output device");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = TickdownError::AudioUnavailable(StringError::new("no output device"));
        let message = get_user_friendly_error(&error);
        assert!(message.contains("finish silently"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: TickdownError = io_error.into();
        assert!(matches!(error, TickdownError::IoError(_)));
    }

    #[test]
    fn test_config_error_display() {
        let error = TickdownError::ConfigError(StringError::new("invalid config path"));
        assert_eq!(error.to_string(), "Configuration error: invalid config path");
    }
}
