//! UTC calendar-day keys for activity bucketing.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Time;

/// A single UTC calendar day.
///
/// Keys format (and parse) as zero-padded `YYYY-MM-DD`, the same shape the
/// streak reduction de-duplicates on. Two events share a `DayKey` exactly
/// when they fall on the same UTC date, regardless of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Bucket an instant into its UTC calendar day.
    pub fn from_time(at: Time) -> Self {
        Self(at.date_naive())
    }

    /// The current UTC calendar day.
    pub fn today() -> Self {
        Self::from_time(Utc::now())
    }

    /// Build a key from calendar components; `None` for invalid dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Midnight (00:00:00) at the start of this day, as a UTC instant.
    pub fn start_of_day(&self) -> Time {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// The previous calendar day (saturates at the calendar floor).
    pub fn pred(&self) -> Self {
        Self(self.0.pred_opt().unwrap_or(NaiveDate::MIN))
    }

    /// Whole days between `other` and this day; positive when `self` is later.
    pub fn days_since(&self, other: DayKey) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // NaiveDate renders as ISO 8601 (zero-padded YYYY-MM-DD) already.
        self.0.fmt(f)
    }
}

impl std::str::FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::parse_from_str(s, "%Y-%m-%d")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_key_formats_zero_padded() {
        let key = DayKey::from_ymd(2026, 3, 7).unwrap();
        assert_eq!(key.to_string(), "2026-03-07");
    }

    #[test]
    fn test_day_key_round_trips_through_str() {
        let key: DayKey = "2025-12-31".parse().unwrap();
        assert_eq!(key, DayKey::from_ymd(2025, 12, 31).unwrap());
        assert_eq!(key.to_string(), "2025-12-31");
    }

    #[test]
    fn test_same_day_instants_share_a_key() {
        let morning = Utc.with_ymd_and_hms(2026, 8, 24, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2026, 8, 24, 23, 59, 59).unwrap();
        assert_eq!(DayKey::from_time(morning), DayKey::from_time(night));
    }

    #[test]
    fn test_pred_and_days_since() {
        let today = DayKey::from_ymd(2026, 1, 1).unwrap();
        let yesterday = today.pred();
        assert_eq!(yesterday.to_string(), "2025-12-31");
        assert_eq!(today.days_since(yesterday), 1);
        assert_eq!(yesterday.days_since(today), -1);
    }

    #[test]
    fn test_start_of_day_is_utc_midnight() {
        let key = DayKey::from_ymd(2026, 8, 24).unwrap();
        let start = key.start_of_day();
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 24, 0, 0, 0).unwrap());
    }
}
