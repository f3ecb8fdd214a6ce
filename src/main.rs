//! `Tickdown` - a single-window desktop countdown timer
//!
//! Set a duration with steppers or text fields, start/pause/reset the
//! one-second countdown, and get a chime plus a flashing background when it
//! reaches zero. The window can float above all other windows and
//! workspaces, and the last-used duration persists across restarts.

// Hide the console window on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use tickdown::{
    audio::ChimePlayer,
    config::ConfigManager,
    timer::{DurationSetting, TimerController},
    utils,
};
use tracing::{info, warn};

// Include Slint-generated code
slint::include_modules!();

/// Main entry point for the application
///
/// Initializes logging, loads the persisted timer settings, sets up the
/// audio cue (running silently if no output device is available), and hands
/// control to the GUI event loop.
fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("Tickdown v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load timer settings")?;
    info!(
        "Settings loaded: duration {:02}:{:02}:{:02}, float window: {}",
        config.hours, config.minutes, config.seconds, config.float_window
    );

    // A missing audio device disables the chime instead of aborting startup;
    // the countdown itself is unaffected.
    let chime = match ChimePlayer::new() {
        Ok(player) => Some(player),
        Err(e) => {
            warn!("Completion chime disabled: {}", e);
            None
        }
    };

    let controller = TimerController::new(DurationSetting {
        hours: config.hours,
        minutes: config.minutes,
        seconds: config.seconds,
    });

    let gui_controller = GuiController::new(controller, chime, &config)
        .context("Failed to create the timer window")?;

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("Tickdown shutting down");

    Ok(())
}
