//! Human-readable duration formatting

use chrono::Duration;

/// Format whole seconds as `"{h}h {mm}m {ss}s"`.
///
/// Minutes and seconds are zero-padded; hours are not and never roll over
/// into days. Negative input is clamped to zero.
pub fn format_seconds(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{}h {:02}m {:02}s", h, m, s)
}

/// Format a duration, truncating sub-second precision
pub fn format_duration(duration: Duration) -> String {
    format_seconds(duration.num_seconds())
}
