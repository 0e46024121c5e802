//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for turning filesystem
//! timestamps into the ISO 8601 form used by `<lastmod>`.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix_secs(1_718_461_845).unwrap();
//! assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45+00:00");
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: i64 = 86_400;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert seconds since the Unix epoch (negative = before 1970).
    ///
    /// Returns `None` for years outside `0..=9999`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Ranges checked below
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        let days = secs.div_euclid(SECS_PER_DAY);
        let rem = secs.rem_euclid(SECS_PER_DAY);

        let (year, month, day) = civil_from_days(days);
        if !(0..=9999).contains(&year) {
            return None;
        }

        Some(Self::new(
            year as u16,
            month,
            day,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        ))
    }

    /// Convert a `SystemTime`, truncating sub-second precision.
    pub fn from_system_time(time: SystemTime) -> Option<Self> {
        let secs = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_secs()).ok()?,
            Err(err) => {
                // Floor toward the earlier second, like truncating the
                // fractional part of a positive timestamp.
                let before = err.duration();
                let whole = i64::try_from(before.as_secs()).ok()?;
                if before.subsec_nanos() > 0 {
                    -whole - 1
                } else {
                    -whole
                }
            }
        };
        Self::from_unix_secs(secs)
    }

    /// Format as ISO 8601 with an explicit UTC offset.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SS+00:00`
    pub fn to_iso8601(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+00:00",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // month/day are small
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_unix_secs_epoch() {
        let dt = DateTimeUtc::from_unix_secs(0).unwrap();
        assert_eq!(dt, DateTimeUtc::new(1970, 1, 1, 0, 0, 0));
        assert_eq!(dt.to_iso8601(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_from_unix_secs_known_date() {
        let dt = DateTimeUtc::from_unix_secs(1_718_461_845).unwrap();
        assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45+00:00");
    }

    #[test]
    fn test_from_unix_secs_leap_day() {
        let dt = DateTimeUtc::from_unix_secs(1_709_164_800).unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn test_from_unix_secs_before_epoch() {
        let dt = DateTimeUtc::from_unix_secs(-1).unwrap();
        assert_eq!(dt.to_iso8601(), "1969-12-31T23:59:59+00:00");
    }

    #[test]
    fn test_from_system_time_drops_subseconds() {
        let time = UNIX_EPOCH + Duration::from_millis(1_718_461_845_999);
        let dt = DateTimeUtc::from_system_time(time).unwrap();
        assert_eq!(dt.to_iso8601(), "2024-06-15T14:30:45+00:00");
    }

    #[test]
    fn test_from_system_time_before_epoch_floors() {
        let time = UNIX_EPOCH - Duration::from_millis(1500);
        let dt = DateTimeUtc::from_system_time(time).unwrap();
        assert_eq!(dt.to_iso8601(), "1969-12-31T23:59:58+00:00");
    }

    #[test]
    fn test_to_iso8601_pads_fields() {
        let dt = DateTimeUtc::new(2025, 1, 2, 3, 4, 5);
        assert_eq!(dt.to_iso8601(), "2025-01-02T03:04:05+00:00");
    }
}
