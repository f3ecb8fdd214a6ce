//! Window-chrome control for the float mode
//!
//! Float mode keeps the timer above every other window and pins it across
//! virtual desktops/spaces. The always-on-top part is expressed declaratively
//! in the `.slint` file; workspace pinning and the explicit window level are
//! only reachable through the winit backend, so when another backend is
//! active the operation is logged and skipped and float mode degrades to the
//! on-top hint.

use i_slint_backend_winit::WinitWindowAccessor;
use i_slint_backend_winit::winit::window::WindowLevel;
use tracing::{debug, warn};

/// Apply or clear float mode on the native window
///
/// Never fails: an unsupported windowing backend is logged and ignored.
pub fn apply_float_mode(window: &slint::Window, float: bool) {
    let level = if float {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };

    let applied = window.with_winit_window(|winit_window| {
        winit_window.set_window_level(level);
        winit_window.set_visible_on_all_workspaces(float);
    });

    match applied {
        Some(()) => debug!("Float mode {}", if float { "applied" } else { "cleared" }),
        None => warn!(
            "Windowing backend does not expose the native window; \
             float mode limited to the always-on-top hint"
        ),
    }
}
