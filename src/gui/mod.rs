//! GUI module
//!
//! Provides the Slint-based window for the countdown timer: callback wiring
//! for the steppers, text fields, and buttons, the repeating one-second
//! tick, the completion flash, and the float-window chrome control.

pub mod float;
pub mod gui_controller;

pub use gui_controller::GuiController;
