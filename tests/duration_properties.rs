//! Property tests for the duration arithmetic, commit rules, and display
//! formatting.

use proptest::prelude::*;
use tickdown::timer::{DurationSetting, Tick, TimerController, TimerState, format_hms};

proptest! {
    #[test]
    fn total_matches_components(h in 0u32..=500, m in 0u32..=59, s in 0u32..=59) {
        let mut controller = TimerController::new(DurationSetting {
            hours: 0,
            minutes: 0,
            seconds: 0,
        });
        controller.set_hours(h);
        controller.set_minutes(m);
        controller.set_seconds(s);

        let expected = u64::from(h) * 3600 + u64::from(m) * 60 + u64::from(s);
        prop_assert_eq!(controller.duration().total_seconds(), expected);
        // While idle the display tracks the duration
        prop_assert_eq!(controller.remaining(), expected);
    }

    #[test]
    fn commit_accepts_exactly_what_the_setters_accept(h in 0u32..=500, m in 0u32..=59, s in 0u32..=59) {
        let mut stepped = TimerController::new(DurationSetting { hours: 0, minutes: 0, seconds: 0 });
        stepped.set_hours(h);
        stepped.set_minutes(m);
        stepped.set_seconds(s);

        let mut committed = TimerController::new(DurationSetting { hours: 0, minutes: 0, seconds: 0 });
        committed.commit_field_edits(&h.to_string(), &m.to_string(), &s.to_string());

        prop_assert_eq!(stepped.duration(), committed.duration());
    }

    #[test]
    fn garbage_field_text_commits_as_zero(text in "[^0-9]*") {
        let mut controller = TimerController::new(DurationSetting { hours: 1, minutes: 2, seconds: 3 });
        controller.commit_field_edits(&text, &text, &text);
        prop_assert_eq!(controller.duration().total_seconds(), 0);
    }

    #[test]
    fn display_is_zero_padded_positional(total in 0u64..=1_000_000u64) {
        let text = format_hms(total);
        let parts: Vec<&str> = text.split(':').collect();
        prop_assert_eq!(parts.len(), 3);
        for part in &parts {
            prop_assert!(part.len() >= 2, "every unit is zero-padded: {}", text);
        }

        let h: u64 = parts[0].parse().unwrap();
        let m: u64 = parts[1].parse().unwrap();
        let s: u64 = parts[2].parse().unwrap();
        prop_assert!(m < 60 && s < 60);
        prop_assert_eq!(h * 3600 + m * 60 + s, total);
    }

    #[test]
    fn countdown_ticks_exactly_total_times(total in 1u64..=600u64) {
        let mut controller = TimerController::new(DurationSetting { hours: 0, minutes: 0, seconds: 0 });
        controller.reset("0", "0", &total.to_string());
        controller.toggle_start_pause("0", "0", &total.to_string());

        let mut ticks = 0u64;
        loop {
            match controller.tick() {
                Tick::Running { .. } => ticks += 1,
                Tick::Completed => {
                    ticks += 1;
                    break;
                }
            }
            prop_assert!(ticks <= total, "countdown must not outlive its duration");
        }

        prop_assert_eq!(ticks, total);
        prop_assert_eq!(controller.state(), TimerState::Idle);
        prop_assert_eq!(controller.remaining(), 0);
    }
}
