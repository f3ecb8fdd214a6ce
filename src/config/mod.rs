//! Configuration management module
//!
//! This module handles loading, saving, and managing the persisted timer
//! settings. Settings are stored in `<user config dir>/Tickdown/config.json`
//! with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::TimerConfig;
