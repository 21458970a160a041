//! Calendar month keys
//!
//! Monthly expense totals are keyed by calendar month in canonical
//! `"YYYY-MM"` form. `YearMonth` keeps that key validated and gives the
//! forecaster whole-month arithmetic (distance and advance) that reflects
//! real calendar gaps rather than list positions.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A calendar month such as `2025-07`.
///
/// Ordering matches chronological order, which for the zero-padded string
/// form is also lexicographic order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month, rejecting month numbers outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Signed count of whole calendar months from `self` to `other`.
    ///
    /// Positive when `other` is later. Missing months in a data set show up
    /// as larger distances here, never as consecutive indexes.
    pub fn months_until(&self, other: YearMonth) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * 12
            + (i64::from(other.month) - i64::from(self.month))
    }

    /// Advance by `n` calendar months; negative `n` moves backwards.
    pub fn plus_months(&self, n: i64) -> Self {
        // zero-based month count since year 0, safe for euclidean div/rem
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + n;
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    /// Parse the canonical `"YYYY-MM"` form. Anything else (wrong width,
    /// non-digits, month outside `1..=12`) is a hard error; month strings
    /// are caller input and silent repair would corrupt the regression.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = s.split_once('-').and_then(|(y, m)| {
            if y.len() != 4
                || m.len() != 2
                || !y.bytes().all(|b| b.is_ascii_digit())
                || !m.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            let year: i32 = y.parse().ok()?;
            let month: u32 = m.parse().ok()?;
            YearMonth::new(year, month).ok()
        });
        parsed.ok_or_else(|| Error::InvalidMonth(s.to_string()))
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_form() {
        let ym: YearMonth = "2025-07".parse().unwrap();
        assert_eq!(ym.year(), 2025);
        assert_eq!(ym.month(), 7);
        assert_eq!(ym.to_string(), "2025-07");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["2025-13", "2025-00", "2025-7", "25-07", "2025/07", "garbage", "", "2025-1a"] {
            assert!(bad.parse::<YearMonth>().is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let a: YearMonth = "2024-12".parse().unwrap();
        let b: YearMonth = "2025-01".parse().unwrap();
        let c: YearMonth = "2025-11".parse().unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn months_until_counts_calendar_distance() {
        let base: YearMonth = "2025-01".parse().unwrap();
        assert_eq!(base.months_until("2025-01".parse().unwrap()), 0);
        assert_eq!(base.months_until("2025-03".parse().unwrap()), 2);
        assert_eq!(base.months_until("2026-02".parse().unwrap()), 13);
        assert_eq!(base.months_until("2024-11".parse().unwrap()), -2);
    }

    #[test]
    fn plus_months_wraps_years() {
        let ym: YearMonth = "2025-11".parse().unwrap();
        assert_eq!(ym.plus_months(1).to_string(), "2025-12");
        assert_eq!(ym.plus_months(2).to_string(), "2026-01");
        assert_eq!(ym.plus_months(14).to_string(), "2027-01");
        assert_eq!(ym.plus_months(-11).to_string(), "2024-12");
    }

    #[test]
    fn plus_months_inverts_months_until() {
        let a: YearMonth = "2023-04".parse().unwrap();
        let b: YearMonth = "2026-09".parse().unwrap();
        assert_eq!(a.plus_months(a.months_until(b)), b);
        assert_eq!(b.plus_months(b.months_until(a)), a);
    }

    #[test]
    fn from_date_takes_containing_month() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(YearMonth::from_date(date).to_string(), "2025-07");
    }
}
