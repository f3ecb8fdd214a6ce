//! Countdown timer module
//!
//! This module implements the core of the application: the run/pause state
//! machine driving the one-second countdown, the field/stepper commit rules,
//! and the `HH:MM:SS` display formatting.
//!
//! # Event Flow
//!
//! ```text
//! stepper edit / field commit / button press ─▶ TimerController
//!                                                    │
//! repeating 1 s tick ──▶ tick() ──▶ Tick::Completed ─▶ chime + flash (GUI)
//! ```
//!
//! The controller performs no I/O of its own. The GUI layer feeds it raw
//! field text and tick events, mirrors its state into the widgets, and
//! persists the duration whenever it changes.

pub mod controller;
pub mod format;

pub use controller::{DurationSetting, Tick, TimerController, TimerState};
pub use format::format_hms;
