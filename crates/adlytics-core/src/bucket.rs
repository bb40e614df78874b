//! Time bucketing
//!
//! A bucket is a date reduced to day, week, or month granularity. Buckets are
//! pure functions of the date, used only as aggregation keys. Weeks start on
//! Monday, uniformly; months are calendar months.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

/// Aggregation granularity for time buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Granularity {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl Granularity {
    /// All granularities, in selector display order
    pub const ALL: [Granularity; 3] =
        [Granularity::Daily, Granularity::Weekly, Granularity::Monthly];
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// Reduce a date to the first date of its bucket.
///
/// Daily buckets are the date itself, weekly buckets start on Monday, and
/// monthly buckets start on the first of the calendar month.
pub fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Daily => date,
        Granularity::Weekly => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        Granularity::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .expect("day 1 of an existing month is always valid"),
    }
}

/// Human-readable label for a bucket, e.g. "2024-09-14", "Wk of 2024-09-09",
/// "Sep 2024".
pub fn bucket_label(start: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Daily => start.format("%Y-%m-%d").to_string(),
        Granularity::Weekly => format!("Wk of {}", start.format("%Y-%m-%d")),
        Granularity::Monthly => start.format("%b %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_bucket_is_identity() {
        assert_eq!(bucket_start(date(2024, 9, 14), Granularity::Daily), date(2024, 9, 14));
    }

    #[test]
    fn test_weekly_bucket_starts_monday() {
        // 2024-09-14 is a Saturday; its week starts Monday 2024-09-09
        assert_eq!(bucket_start(date(2024, 9, 14), Granularity::Weekly), date(2024, 9, 9));
        // A Monday maps to itself
        assert_eq!(bucket_start(date(2024, 9, 9), Granularity::Weekly), date(2024, 9, 9));
        // A Sunday belongs to the preceding Monday's week
        assert_eq!(bucket_start(date(2024, 9, 15), Granularity::Weekly), date(2024, 9, 9));
        // Week spanning a month boundary
        assert_eq!(bucket_start(date(2024, 10, 1), Granularity::Weekly), date(2024, 9, 30));
    }

    #[test]
    fn test_monthly_bucket_starts_on_first() {
        assert_eq!(bucket_start(date(2024, 9, 14), Granularity::Monthly), date(2024, 9, 1));
        assert_eq!(bucket_start(date(2024, 2, 29), Granularity::Monthly), date(2024, 2, 1));
    }

    #[test]
    fn test_labels() {
        assert_eq!(bucket_label(date(2024, 9, 14), Granularity::Daily), "2024-09-14");
        assert_eq!(bucket_label(date(2024, 9, 9), Granularity::Weekly), "Wk of 2024-09-09");
        assert_eq!(bucket_label(date(2024, 9, 1), Granularity::Monthly), "Sep 2024");
    }
}
