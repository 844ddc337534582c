//! Display breakdown of a millisecond duration.
//!
//! A single pure function maps a duration to the four zero-padded fields a
//! presentation layer renders. Nothing here is cached — callers re-derive the
//! breakdown from engine state after each change.

use serde::Serialize;

/// A duration broken down for display: `"01"` / `"01"` / `"01"` / `"01"`.
///
/// Each field is a two-digit, zero-padded decimal string. Hours grow past two
/// digits only if a caller raises the stopwatch ceiling beyond 99 hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    /// Hundredths of a second (0-99).
    pub centiseconds: String,
}

/// Break a millisecond duration into hours/minutes/seconds/centiseconds.
///
/// Truncates, never rounds: 1999 ms is `00:00:01.99`.
///
/// # Examples
///
/// ```
/// use lapse_engine::format_duration;
///
/// let t = format_duration(3_661_010);
/// assert_eq!(t.hours, "01");
/// assert_eq!(t.minutes, "01");
/// assert_eq!(t.seconds, "01");
/// assert_eq!(t.centiseconds, "01");
/// ```
pub fn format_duration(ms: u64) -> FormattedTime {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let centiseconds = (ms % 1000) / 10;

    FormattedTime {
        hours: format!("{hours:02}"),
        minutes: format!("{minutes:02}"),
        seconds: format!("{seconds:02}"),
        centiseconds: format!("{centiseconds:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        let t = format_duration(0);
        assert_eq!(t.hours, "00");
        assert_eq!(t.minutes, "00");
        assert_eq!(t.seconds, "00");
        assert_eq!(t.centiseconds, "00");
    }

    #[test]
    fn test_format_one_of_each_field() {
        // 1h 1m 1.01s
        let t = format_duration(3_661_010);
        assert_eq!(t.hours, "01");
        assert_eq!(t.minutes, "01");
        assert_eq!(t.seconds, "01");
        assert_eq!(t.centiseconds, "01");
    }

    #[test]
    fn test_format_truncates_sub_centisecond() {
        let t = format_duration(1_999);
        assert_eq!(t.seconds, "01");
        assert_eq!(t.centiseconds, "99");
    }

    #[test]
    fn test_format_field_rollover() {
        // 59m 59.99s stays below the hour
        let t = format_duration(3_599_990);
        assert_eq!(t.hours, "00");
        assert_eq!(t.minutes, "59");
        assert_eq!(t.seconds, "59");
        assert_eq!(t.centiseconds, "99");
    }

    #[test]
    fn test_format_24_hour_ceiling() {
        let t = format_duration(24 * 60 * 60 * 1000);
        assert_eq!(t.hours, "24");
        assert_eq!(t.minutes, "00");
    }

    #[test]
    fn test_serializes_as_four_field_object() {
        let json = serde_json::to_value(format_duration(61_500)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hours": "00",
                "minutes": "01",
                "seconds": "01",
                "centiseconds": "50",
            })
        );
    }
}
