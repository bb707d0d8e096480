//! Calendar month representation
//!
//! Months are the grouping unit for all reports: the dashboard summarizes
//! the current month and charts a trailing window of months.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// A calendar month, e.g. 2024-03.
///
/// Ordering is chronological (year first, then month), so months can be
/// used directly as `BTreeMap` keys to get ascending series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month. `month` must be in `1..=12`; out-of-range values
    /// are clamped so arithmetic never produces an unrepresentable date.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// The month a date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn start_date(&self) -> NaiveDate {
        // every constructor keeps month in 1..=12
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last day of the month (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.unwrap() - Duration::days(1)
    }

    /// Check if a date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month, rolling December into January.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling January into December.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month `n` months before this one.
    ///
    /// `months_back(0)` is the month itself; `months_back(11)` is the start
    /// of a twelve-month trailing window ending here.
    pub fn months_back(&self, n: u32) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) - n as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Short label for chart axes, e.g. "Mar 24".
    pub fn short_label(&self) -> String {
        self.start_date().format("%b %y").to_string()
    }

    /// Parse a month string in `YYYY-MM` form.
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year_part, month_part) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_part
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(Month::from_date(date), Month::new(2024, 3));
    }

    #[test]
    fn test_bounds() {
        let feb = Month::new(2024, 2);
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        // 2024 is a leap year
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_navigation() {
        let dec = Month::new(2024, 12);
        assert_eq!(dec.next(), Month::new(2025, 1));

        let jan = Month::new(2025, 1);
        assert_eq!(jan.prev(), Month::new(2024, 12));
    }

    #[test]
    fn test_contains() {
        let mar = Month::new(2024, 3);
        assert!(mar.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(mar.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!mar.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!mar.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_months_back() {
        let mar = Month::new(2024, 3);
        assert_eq!(mar.months_back(0), mar);
        assert_eq!(mar.months_back(2), Month::new(2024, 1));
        assert_eq!(mar.months_back(3), Month::new(2023, 12));
        assert_eq!(mar.months_back(11), Month::new(2023, 4));
        assert_eq!(mar.months_back(24), Month::new(2022, 3));
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2023, 12) < Month::new(2024, 1));
        assert!(Month::new(2024, 3) < Month::new(2024, 4));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2024-03").unwrap(), Month::new(2024, 3));
        assert_eq!(Month::parse(" 2024-12 ").unwrap(), Month::new(2024, 12));
        assert!(matches!(
            Month::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            Month::parse("March 2024"),
            Err(MonthParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::new(2024, 3)), "2024-03");
        assert_eq!(format!("{}", Month::new(987, 12)), "0987-12");
    }
}
