//! Remaining-time display formatting

/// Format a number of seconds as zero-padded `HH:MM:SS`
///
/// Positional format with no unit suppression: 5 seconds renders as
/// `00:00:05`, and the hours field grows past two digits if it has to.
pub fn format_hms(total_secs: u64) -> String {
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
