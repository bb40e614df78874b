//! Pipeline parameters
//!
//! The date-range filter and the portfolio view selector are explicit
//! parameters threaded through the pipeline call, not ambient state.

use std::fmt;

use chrono::NaiveDate;

use crate::classify::PortfolioGroup;
use crate::error::{Error, Result};

/// Inclusive date range applied to both inputs before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether a date falls inside the range (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Portfolio view selector for the trends table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PortfolioFilter {
    #[default]
    Overall,
    Jn,
    NonJn,
}

impl PortfolioFilter {
    /// Whether a portfolio group is selected by this filter
    pub fn matches(&self, group: PortfolioGroup) -> bool {
        match self {
            PortfolioFilter::Overall => true,
            PortfolioFilter::Jn => group == PortfolioGroup::Jn,
            PortfolioFilter::NonJn => group == PortfolioGroup::NonJn,
        }
    }
}

impl fmt::Display for PortfolioFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortfolioFilter::Overall => "Overall",
            PortfolioFilter::Jn => "JN",
            PortfolioFilter::NonJn => "Non-JN",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_validation() {
        assert!(DateRange::new(date(2024, 9, 1), date(2024, 9, 30)).is_ok());
        // Single-day ranges are allowed
        assert!(DateRange::new(date(2024, 9, 1), date(2024, 9, 1)).is_ok());
        assert!(DateRange::new(date(2024, 9, 2), date(2024, 9, 1)).is_err());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let range = DateRange::new(date(2024, 9, 1), date(2024, 9, 30)).unwrap();
        assert!(range.contains(date(2024, 9, 1)));
        assert!(range.contains(date(2024, 9, 30)));
        assert!(!range.contains(date(2024, 8, 31)));
        assert!(!range.contains(date(2024, 10, 1)));
    }

    #[test]
    fn test_portfolio_filter() {
        assert!(PortfolioFilter::Overall.matches(PortfolioGroup::Jn));
        assert!(PortfolioFilter::Overall.matches(PortfolioGroup::NonJn));
        assert!(PortfolioFilter::Jn.matches(PortfolioGroup::Jn));
        assert!(!PortfolioFilter::Jn.matches(PortfolioGroup::NonJn));
        assert!(!PortfolioFilter::NonJn.matches(PortfolioGroup::Jn));
    }
}
