use chrono::{DateTime, Utc};

/// Compact elapsed time such as `42s`, `3m 05s` or `1h 02m`.
#[must_use]
pub fn format_elapsed(started: DateTime<Utc>, completed: DateTime<Utc>) -> String {
    let secs = (completed - started).num_seconds().max(0);
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
