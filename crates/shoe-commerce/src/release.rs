//! Release recency rules.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Default length of the "just released" window.
pub const DEFAULT_NEW_RELEASE_DAYS: u32 = 30;

/// Window after release during which a shoe counts as new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseWindow {
    /// Window length in days.
    pub days: u32,
}

impl Default for ReleaseWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_NEW_RELEASE_DAYS,
        }
    }
}

impl ReleaseWindow {
    /// Create a window of the given number of days.
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// Window length as a duration.
    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }

    /// Whether a shoe released at `release_date` is new as of `now`.
    ///
    /// The window is half-open: a shoe exactly `days` old is no longer new.
    /// Release dates in the future always count as new.
    pub fn is_new(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(release_date) < self.duration()
    }
}

/// Parse a release date from text.
///
/// Accepts RFC 3339 timestamps (`2020-01-01T09:30:00Z`) and plain dates
/// (`2020-01-01`, read as midnight UTC).
pub fn parse_release_date(input: &str) -> Result<DateTime<Utc>, CommerceError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| CommerceError::InvalidReleaseDate(input.to_string()))
}

/// Convert Unix epoch milliseconds to a release date.
pub fn release_date_from_millis(millis: i64) -> Result<DateTime<Utc>, CommerceError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| CommerceError::InvalidReleaseDate(millis.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        parse_release_date(s).unwrap()
    }

    #[test]
    fn test_default_window_is_thirty_days() {
        assert_eq!(ReleaseWindow::default().days, 30);
    }

    #[test]
    fn test_recent_release_is_new() {
        let now = at("2024-03-15T12:00:00Z");
        let window = ReleaseWindow::default();
        assert!(window.is_new(now, now));
        assert!(window.is_new(at("2024-03-01T00:00:00Z"), now));
    }

    #[test]
    fn test_window_boundary() {
        let now = at("2024-03-31T00:00:00Z");
        let window = ReleaseWindow::default();
        // exactly 30 days old
        assert!(!window.is_new(at("2024-03-01T00:00:00Z"), now));
        assert!(window.is_new(at("2024-03-01T00:00:01Z"), now));
    }

    #[test]
    fn test_old_release_is_not_new() {
        let now = at("2024-03-15T00:00:00Z");
        assert!(!ReleaseWindow::default().is_new(at("2019-01-01"), now));
    }

    #[test]
    fn test_future_release_is_new() {
        let now = at("2024-03-15T00:00:00Z");
        assert!(ReleaseWindow::default().is_new(at("2025-01-01"), now));
    }

    #[test]
    fn test_custom_window() {
        let now = at("2024-03-15T00:00:00Z");
        let release = at("2024-03-05T00:00:00Z");
        assert!(!ReleaseWindow::days(7).is_new(release, now));
        assert!(ReleaseWindow::days(14).is_new(release, now));
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(
            at("2020-01-01"),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            at("2020-01-01T05:00:00+05:00"),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
        assert!(matches!(
            parse_release_date("last tuesday"),
            Err(CommerceError::InvalidReleaseDate(_))
        ));
    }

    #[test]
    fn test_from_millis() {
        let dt = release_date_from_millis(1_577_836_800_000).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
    }
}
