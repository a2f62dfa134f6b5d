use chrono::NaiveTime;

/// Formats a wall-clock time as an axis label, e.g. `09:30`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Date portion of a `"<date> <time>"` timestamp string.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split(' ').next().unwrap_or_default()
}
