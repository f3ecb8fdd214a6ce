//! Utility modules
//!
//! Provides logging initialization with per-session log rotation.

pub mod logging;

pub use logging::init_logging;
