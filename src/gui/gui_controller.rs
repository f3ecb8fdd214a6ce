//! GUI controller implementation
//!
//! Wires the Slint window to the `TimerController`: every discrete event
//! (stepper edit, field commit, button press, timer tick) mutates the
//! controller and then explicitly pushes the resulting state back into all
//! dependent views. The repeating one-second tick is a `slint::Timer` that
//! is started on Start, stopped on Pause, and stopped again when the
//! countdown completes, so no tick can fire after cancellation.

use crate::gui::float;
use parking_lot::Mutex;
use slint::{ComponentHandle, SharedString, Timer, TimerMode};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tickdown::audio::ChimePlayer;
use tickdown::config::{ConfigManager, TimerConfig};
use tickdown::error::{Result, StringError, TickdownError};
use tickdown::timer::{Tick, TimerController, TimerState, format_hms};
use tracing::{info, warn};

/// Number of background pulses in the completion flash (on, off, on, off)
const FLASH_PULSES: u32 = 4;

/// Spacing between completion flash pulses
const FLASH_INTERVAL: Duration = Duration::from_millis(200);

/// Period of the countdown tick
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns the Slint window and the callback wiring around the timer core
pub struct GuiController {
    window: crate::MainWindow,
}

impl GuiController {
    /// Create the window, seed it from the persisted settings, and wire up
    /// all callbacks
    pub fn new(
        controller: TimerController,
        chime: Option<ChimePlayer>,
        config: &TimerConfig,
    ) -> Result<Self> {
        let window = crate::MainWindow::new()
            .map_err(|e| TickdownError::WindowingError(StringError::new(e.to_string())))?;

        let controller = Arc::new(Mutex::new(controller));
        let chime = Rc::new(chime);
        let tick_timer = Rc::new(Timer::default());

        window.set_float_window(config.float_window);
        if config.float_window {
            float::apply_float_mode(window.window(), true);
        }
        Self::sync_duration_views(&window, &controller.lock());

        // Stepper edits update one duration component each and, while idle,
        // refresh the remaining-time display.
        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            window.on_hours_stepped(move |value| {
                let Some(window) = weak.upgrade() else { return };
                let mut guard = controller.lock();
                guard.set_hours(u32::try_from(value).unwrap_or(0));
                Self::sync_duration_views(&window, &guard);
                Self::persist(&window, &guard);
            });
        }
        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            window.on_minutes_stepped(move |value| {
                let Some(window) = weak.upgrade() else { return };
                let mut guard = controller.lock();
                guard.set_minutes(u32::try_from(value).unwrap_or(0));
                Self::sync_duration_views(&window, &guard);
                Self::persist(&window, &guard);
            });
        }
        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            window.on_seconds_stepped(move |value| {
                let Some(window) = weak.upgrade() else { return };
                let mut guard = controller.lock();
                guard.set_seconds(u32::try_from(value).unwrap_or(0));
                Self::sync_duration_views(&window, &guard);
                Self::persist(&window, &guard);
            });
        }

        // Text fields commit on focus loss or Enter; invalid content
        // commits as 0 and the views re-render the canonical values.
        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            window.on_fields_committed(move || {
                let Some(window) = weak.upgrade() else { return };
                let mut guard = controller.lock();
                guard.commit_field_edits(
                    window.get_hours_text().as_str(),
                    window.get_minutes_text().as_str(),
                    window.get_seconds_text().as_str(),
                );
                Self::sync_duration_views(&window, &guard);
                Self::persist(&window, &guard);
            });
        }

        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            let chime = Rc::clone(&chime);
            let tick_timer = Rc::clone(&tick_timer);
            window.on_start_pause_clicked(move || {
                let Some(window) = weak.upgrade() else { return };
                let mut guard = controller.lock();
                let state = guard.toggle_start_pause(
                    window.get_hours_text().as_str(),
                    window.get_minutes_text().as_str(),
                    window.get_seconds_text().as_str(),
                );
                match state {
                    TimerState::Running => {
                        info!("Countdown started at {}", guard.display());
                        Self::sync_duration_views(&window, &guard);
                        Self::persist(&window, &guard);
                        drop(guard);
                        window.set_running(true);
                        Self::start_tick(
                            &tick_timer,
                            weak.clone(),
                            Arc::clone(&controller),
                            Rc::clone(&chime),
                        );
                    }
                    TimerState::Idle => {
                        info!("Countdown paused at {}", guard.display());
                        drop(guard);
                        tick_timer.stop();
                        window.set_running(false);
                    }
                }
            });
        }

        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            window.on_reset_clicked(move || {
                let Some(window) = weak.upgrade() else { return };
                let mut guard = controller.lock();
                guard.reset(
                    window.get_hours_text().as_str(),
                    window.get_minutes_text().as_str(),
                    window.get_seconds_text().as_str(),
                );
                info!("Countdown reset to {}", guard.display());
                Self::sync_duration_views(&window, &guard);
                Self::persist(&window, &guard);
            });
        }

        {
            let weak = window.as_weak();
            let controller = Arc::clone(&controller);
            window.on_float_toggled(move |enabled| {
                let Some(window) = weak.upgrade() else { return };
                info!(
                    "Float window {}",
                    if enabled { "enabled" } else { "disabled" }
                );
                float::apply_float_mode(window.window(), enabled);
                Self::persist(&window, &controller.lock());
            });
        }

        Ok(Self { window })
    }

    /// Run the GUI event loop until the window is closed
    pub fn run(self) -> Result<()> {
        self.window
            .run()
            .map_err(|e| TickdownError::WindowingError(StringError::new(e.to_string())))
    }

    /// Start the repeating one-second tick
    ///
    /// The closure holds only a weak handle to its own timer so stopping it
    /// from inside the tick does not keep the timer alive in a cycle.
    fn start_tick(
        tick_timer: &Rc<Timer>,
        weak: slint::Weak<crate::MainWindow>,
        controller: Arc<Mutex<TimerController>>,
        chime: Rc<Option<ChimePlayer>>,
    ) {
        let timer_weak = Rc::downgrade(tick_timer);
        tick_timer.start(TimerMode::Repeated, TICK_PERIOD, move || {
            let Some(window) = weak.upgrade() else { return };
            let outcome = controller.lock().tick();
            match outcome {
                Tick::Running { remaining } => {
                    window.set_remaining_display(SharedString::from(format_hms(remaining)));
                }
                Tick::Completed => {
                    info!("Countdown reached zero");
                    if let Some(timer) = timer_weak.upgrade() {
                        timer.stop();
                    }
                    window.set_remaining_display(SharedString::from(format_hms(0)));
                    window.set_running(false);
                    if let Some(player) = chime.as_ref() {
                        player.play();
                    }
                    Self::run_completion_flash(&window);
                }
            }
        });
    }

    /// Emit the completion flash: alternating background pulses starting
    /// with the highlight color, 200 ms apart
    fn run_completion_flash(window: &crate::MainWindow) {
        for pulse in 0..FLASH_PULSES {
            let weak = window.as_weak();
            Timer::single_shot(FLASH_INTERVAL * pulse, move || {
                if let Some(window) = weak.upgrade() {
                    window.set_flash_on(pulse % 2 == 0);
                }
            });
        }
    }

    /// Push the controller state into every dependent view: stepper values,
    /// zero-padded field text, and the remaining-time display
    fn sync_duration_views(window: &crate::MainWindow, controller: &TimerController) {
        let duration = controller.duration();
        window.set_hours_value(i32::try_from(duration.hours).unwrap_or(i32::MAX));
        window.set_minutes_value(i32::try_from(duration.minutes).unwrap_or(i32::MAX));
        window.set_seconds_value(i32::try_from(duration.seconds).unwrap_or(i32::MAX));
        window.set_hours_text(SharedString::from(format!("{:02}", duration.hours)));
        window.set_minutes_text(SharedString::from(format!("{:02}", duration.minutes)));
        window.set_seconds_text(SharedString::from(format!("{:02}", duration.seconds)));
        window.set_remaining_display(SharedString::from(controller.display()));
    }

    /// Save the current duration and float flag, keeping the in-memory
    /// state authoritative if the write fails
    fn persist(window: &crate::MainWindow, controller: &TimerController) {
        let duration = controller.duration();
        let config = TimerConfig {
            hours: duration.hours,
            minutes: duration.minutes,
            seconds: duration.seconds,
            float_window: window.get_float_window(),
        };
        if let Err(e) = ConfigManager::save(&config) {
            warn!(
                "Failed to save timer settings: {}. Continuing with in-memory values; \
                 changes will be lost on application restart.",
                e
            );
        }
    }
}
