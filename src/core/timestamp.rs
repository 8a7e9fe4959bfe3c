//! Timestamp and elapsed-time formatting
//!
//! Lines are stamped in local time with millisecond precision; a running
//! timer additionally contributes a fixed-width elapsed-seconds field.

use chrono::Local;
use std::time::Duration;

/// strftime format for the line timestamp: `2025-01-08T10:30:45.123`
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Current wall-clock time in the line-prefix format.
#[must_use]
pub fn local_timestamp() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Format elapsed seconds as a bracketed field: 3 decimals, right-justified
/// to 8 characters, e.g. `[   0.052]`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("[{:8.3}]", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_timestamp_shape() {
        let ts = local_timestamp();
        // YYYY-MM-DDTHH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
        assert!(ts[20..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_format_elapsed_small_value() {
        let s = format_elapsed(Duration::from_millis(52));
        assert_eq!(s, "[   0.052]");
    }

    #[test]
    fn test_format_elapsed_field_width() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "[   0.000]");
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "[   1.234]");
        assert_eq!(format_elapsed(Duration::from_secs(1234)), "[1234.000]");
    }

    #[test]
    fn test_format_elapsed_grows_past_field_width() {
        // Long runtimes overflow the pad rather than truncate
        let s = format_elapsed(Duration::from_secs(123_456));
        assert_eq!(s, "[123456.000]");
    }
}
