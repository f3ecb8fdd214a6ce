//! Countdown state machine
//!
//! `TimerController` owns the user-configured duration, the live remaining
//! time, and the run/pause state machine. It is deliberately free of I/O:
//! the GUI layer drives it from discrete events (stepper edits, field
//! commits, button presses, timer ticks) and reacts to what it returns, so
//! every rule here is testable on the host without a window or a clock.

use crate::timer::format::format_hms;

/// Run/pause state of the countdown
///
/// `Idle` covers both "never started" and "paused": the distinction is
/// carried entirely by the remaining time (zero vs. non-zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No tick scheduled; the control affordance reads "Start"
    Idle,
    /// A one-second repeating tick is active; the affordance reads "Pause"
    Running,
}

/// Outcome of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown is still in flight
    Running {
        /// Seconds left after this tick
        remaining: u64,
    },
    /// The countdown reached zero on this tick. The controller has already
    /// transitioned back to `Idle`; the caller cancels the repeating tick
    /// and fires the completion cues (chime + flash).
    Completed,
}

/// User-configured target countdown length
///
/// Minutes and seconds stay in 0..=59 by UI convention; the total is well
/// defined either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSetting {
    /// Hours component
    pub hours: u32,
    /// Minutes component
    pub minutes: u32,
    /// Seconds component
    pub seconds: u32,
}

impl DurationSetting {
    /// Total length in seconds
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

/// Countdown timer state machine
///
/// All mutation happens on the UI event-dispatch context; see the module
/// docs for the division of labor with the GUI layer.
#[derive(Debug)]
pub struct TimerController {
    duration: DurationSetting,
    remaining: u64,
    state: TimerState,
}

impl TimerController {
    /// Create a controller from a starting duration
    ///
    /// The remaining time starts out at the full duration so the display
    /// shows the configured length before the first start.
    pub fn new(duration: DurationSetting) -> Self {
        Self {
            duration,
            remaining: duration.total_seconds(),
            state: TimerState::Idle,
        }
    }

    /// Current run/pause state
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Configured duration components
    pub fn duration(&self) -> DurationSetting {
        self.duration
    }

    /// Live remaining time in seconds
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Remaining time rendered as zero-padded `HH:MM:SS`
    pub fn display(&self) -> String {
        format_hms(self.remaining)
    }

    /// Set the hours component from a stepper edit
    pub fn set_hours(&mut self, hours: u32) {
        self.duration.hours = hours;
        self.refresh_remaining_if_idle();
    }

    /// Set the minutes component from a stepper edit
    pub fn set_minutes(&mut self, minutes: u32) {
        self.duration.minutes = minutes;
        self.refresh_remaining_if_idle();
    }

    /// Set the seconds component from a stepper edit
    pub fn set_seconds(&mut self, seconds: u32) {
        self.duration.seconds = seconds;
        self.refresh_remaining_if_idle();
    }

    /// Commit the three free-text fields into the duration
    ///
    /// Invalid, non-numeric, or negative text commits as 0 for that
    /// component; this is never surfaced as an error. Called when a field
    /// loses focus and before every start/reset. Unlike the stepper setters
    /// this never touches the remaining time on its own.
    pub fn commit_field_edits(&mut self, hours: &str, minutes: &str, seconds: &str) {
        self.duration = DurationSetting {
            hours: parse_field(hours),
            minutes: parse_field(minutes),
            seconds: parse_field(seconds),
        };
    }

    /// Commit field edits and rewind the remaining time to the full duration
    ///
    /// The current state is preserved; nothing at this layer forbids a reset
    /// while running.
    pub fn reset(&mut self, hours: &str, minutes: &str, seconds: &str) {
        self.commit_field_edits(hours, minutes, seconds);
        self.remaining = self.duration.total_seconds();
    }

    /// Flip between `Idle` and `Running`, returning the new state
    ///
    /// Starting commits the field contents first and, only when the
    /// remaining time is exhausted, rewinds it to the full duration so a
    /// paused countdown resumes where it left off. Pausing leaves the
    /// remaining time untouched. The caller schedules or cancels the
    /// repeating tick to match the returned state.
    pub fn toggle_start_pause(&mut self, hours: &str, minutes: &str, seconds: &str) -> TimerState {
        match self.state {
            TimerState::Idle => {
                self.commit_field_edits(hours, minutes, seconds);
                if self.remaining == 0 {
                    self.remaining = self.duration.total_seconds();
                }
                self.state = TimerState::Running;
            }
            TimerState::Running => {
                self.state = TimerState::Idle;
            }
        }
        self.state
    }

    /// Advance the countdown by one second
    ///
    /// Only called while `Running`. When the remaining time hits zero the
    /// controller drops back to `Idle` and reports `Completed` exactly once;
    /// the next start rewinds from the duration again.
    pub fn tick(&mut self) -> Tick {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.state = TimerState::Idle;
            Tick::Completed
        } else {
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// While idle, edits to the duration are reflected in the display
    /// immediately. While running they are not, so they cannot corrupt the
    /// in-flight countdown; the new duration takes effect on the next
    /// reset or restart from zero.
    fn refresh_remaining_if_idle(&mut self) {
        if self.state == TimerState::Idle {
            self.remaining = self.duration.total_seconds();
        }
    }
}

/// Parse one duration field; anything that is not a non-negative integer
/// commits as 0.
fn parse_field(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(hours: u32, minutes: u32, seconds: u32) -> TimerController {
        TimerController::new(DurationSetting {
            hours,
            minutes,
            seconds,
        })
    }

    /// Drive a controller until completion, returning the number of
    /// completion signals observed.
    fn run_to_completion(controller: &mut TimerController, max_ticks: u64) -> u32 {
        let mut completions = 0;
        for _ in 0..max_ticks {
            if controller.state() != TimerState::Running {
                break;
            }
            if controller.tick() == Tick::Completed {
                completions += 1;
            }
        }
        completions
    }

    #[test]
    fn test_total_seconds() {
        let mut c = controller(0, 0, 0);
        c.set_hours(1);
        c.set_minutes(2);
        c.set_seconds(3);
        assert_eq!(c.duration().total_seconds(), 3723);
    }

    #[test]
    fn test_new_controller_shows_full_duration() {
        let c = controller(0, 2, 0);
        assert_eq!(c.state(), TimerState::Idle);
        assert_eq!(c.remaining(), 120);
        assert_eq!(c.display(), "00:02:00");
    }

    #[test]
    fn test_start_from_zero_rewinds_to_duration() {
        let mut c = controller(0, 2, 0);
        c.reset("00", "02", "00");
        // Exhaust the countdown so remaining is 0, then start again
        c.toggle_start_pause("00", "02", "00");
        run_to_completion(&mut c, 1000);
        assert_eq!(c.remaining(), 0);

        let state = c.toggle_start_pause("00", "02", "00");
        assert_eq!(state, TimerState::Running);
        assert_eq!(c.remaining(), 120);
    }

    #[test]
    fn test_final_tick_completes_once_and_idles() {
        let mut c = controller(0, 0, 1);
        c.toggle_start_pause("00", "00", "01");
        assert_eq!(c.remaining(), 1);

        assert_eq!(c.tick(), Tick::Completed);
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.state(), TimerState::Idle);
    }

    #[test]
    fn test_exactly_one_completion_signal() {
        let mut c = controller(0, 0, 3);
        c.toggle_start_pause("00", "00", "03");
        assert_eq!(run_to_completion(&mut c, 1000), 1);
        assert_eq!(c.state(), TimerState::Idle);
    }

    #[test]
    fn test_zero_duration_start_completes_on_first_tick() {
        let mut c = controller(0, 0, 0);
        let state = c.toggle_start_pause("00", "00", "00");
        assert_eq!(state, TimerState::Running);
        assert_eq!(c.tick(), Tick::Completed);
        assert_eq!(c.state(), TimerState::Idle);
    }

    #[test]
    fn test_pause_preserves_remaining() {
        let mut c = controller(0, 1, 0);
        c.toggle_start_pause("00", "01", "00");
        for _ in 0..15 {
            c.tick();
        }
        assert_eq!(c.remaining(), 45);

        let state = c.toggle_start_pause("00", "01", "00");
        assert_eq!(state, TimerState::Idle);
        assert_eq!(c.remaining(), 45);

        // Resume continues from 45, not from the full minute
        let state = c.toggle_start_pause("00", "01", "00");
        assert_eq!(state, TimerState::Running);
        assert_eq!(c.remaining(), 45);
        assert_eq!(c.tick(), Tick::Running { remaining: 44 });
    }

    #[test]
    fn test_reset_commits_fields_and_rewinds() {
        let mut c = controller(0, 2, 0);
        c.reset("01", "02", "03");
        assert_eq!(c.duration().total_seconds(), 3723);
        assert_eq!(c.remaining(), 3723);
        assert_eq!(c.state(), TimerState::Idle);
    }

    #[test]
    fn test_non_numeric_field_commits_as_zero() {
        let mut c = controller(0, 2, 0);
        c.commit_field_edits("abc", "5", "-3");
        let d = c.duration();
        assert_eq!(d.hours, 0);
        assert_eq!(d.minutes, 5);
        assert_eq!(d.seconds, 0);
    }

    #[test]
    fn test_field_parsing_trims_whitespace() {
        let mut c = controller(0, 0, 0);
        c.commit_field_edits(" 7 ", "", "08");
        let d = c.duration();
        assert_eq!(d.hours, 7);
        assert_eq!(d.minutes, 0);
        assert_eq!(d.seconds, 8);
    }

    #[test]
    fn test_stepper_edit_while_idle_refreshes_display() {
        let mut c = controller(0, 2, 0);
        c.set_seconds(30);
        assert_eq!(c.remaining(), 150);
        assert_eq!(c.display(), "00:02:30");
    }

    #[test]
    fn test_stepper_edit_while_running_leaves_countdown_alone() {
        let mut c = controller(0, 2, 0);
        c.toggle_start_pause("00", "02", "00");
        c.tick();
        assert_eq!(c.remaining(), 119);

        c.set_hours(5);
        assert_eq!(c.remaining(), 119, "edit while running must not touch the countdown");

        // The new duration takes effect on the next reset
        c.reset("05", "02", "00");
        assert_eq!(c.remaining(), 5 * 3600 + 120);
    }

    #[test]
    fn test_commit_does_not_refresh_display() {
        let mut c = controller(0, 2, 0);
        c.commit_field_edits("00", "10", "00");
        assert_eq!(c.duration().total_seconds(), 600);
        // Only reset/start recompute the remaining time from a field commit
        assert_eq!(c.remaining(), 120);
    }

    #[test]
    fn test_start_commits_pending_field_edits() {
        let mut c = controller(0, 2, 0);
        // Exhaust so remaining is 0, then start with edited field contents
        c.toggle_start_pause("00", "02", "00");
        run_to_completion(&mut c, 1000);

        c.toggle_start_pause("00", "00", "10");
        assert_eq!(c.duration().total_seconds(), 10);
        assert_eq!(c.remaining(), 10);
    }

    #[test]
    fn test_display_formatting() {
        let mut c = controller(0, 0, 0);
        c.reset("01", "01", "01");
        assert_eq!(c.display(), "01:01:01");
        c.reset("00", "00", "05");
        assert_eq!(c.display(), "00:00:05");
    }
}
