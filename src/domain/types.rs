//! Shared domain types.
//!
//! These types are intentionally kept small and immutable: a `DaySeries` or a
//! `Year` is validated once at construction and never changes afterwards, so
//! every derived view (grid coordinates, week loads) can be recomputed from them.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Days in a common year.
pub const COMMON_YEAR_DAYS: usize = 365;
/// Days in a leap year.
pub const LEAP_YEAR_DAYS: usize = 366;

/// Sample year used when a 365-value series arrives without a declared year.
pub const DEFAULT_COMMON_YEAR: i32 = 2021;
/// Sample year used when a 366-value series arrives without a declared year.
pub const DEFAULT_LEAP_YEAR: i32 = 2020;

/// A calendar year, with its first and last day resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    value: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Year {
    pub fn new(value: i32) -> Result<Self, SheetError> {
        let first_day = NaiveDate::from_ymd_opt(value, 1, 1).ok_or(SheetError::YearOutOfRange(value))?;
        let last_day = NaiveDate::from_ymd_opt(value, 12, 31).ok_or(SheetError::YearOutOfRange(value))?;
        Ok(Self {
            value,
            first_day,
            last_day,
        })
    }

    /// Sample year matching a series length (365 → 2021, 366 → 2020).
    pub fn inferred_from(series: &DaySeries) -> Result<Self, SheetError> {
        if series.len() == LEAP_YEAR_DAYS {
            Self::new(DEFAULT_LEAP_YEAR)
        } else {
            Self::new(DEFAULT_COMMON_YEAR)
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_leap(&self) -> bool {
        is_leap_year(self.value)
    }

    /// Number of days in this year.
    pub fn day_count(&self) -> usize {
        if self.is_leap() { LEAP_YEAR_DAYS } else { COMMON_YEAR_DAYS }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Whether a series of `days` values may describe this year.
    pub fn accepts(&self, days: usize) -> bool {
        days == self.day_count()
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// One value per day of a year, in chronological order.
///
/// The length is always 365 or 366; anything else is rejected by `new`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DaySeries(Vec<f64>);

impl DaySeries {
    pub fn new(values: Vec<f64>) -> Result<Self, SheetError> {
        match values.len() {
            COMMON_YEAR_DAYS | LEAP_YEAR_DAYS => Ok(Self(values)),
            found => Err(SheetError::Size { found }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Smallest non-NaN value.
    pub fn min(&self) -> Option<f64> {
        self.0.iter().copied().filter(|v| !v.is_nan()).reduce(f64::min)
    }

    /// Largest non-NaN value.
    pub fn max(&self) -> Option<f64> {
        self.0.iter().copied().filter(|v| !v.is_nan()).reduce(f64::max)
    }
}

/// Position of a single day on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCoordinate {
    /// Column, 0 (partial first week) to 52 (partial last week).
    pub week: u32,
    /// Row, 1 = Monday .. 7 = Sunday.
    pub weekday: u32,
}

/// Sum of the day values that fall into one week column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekLoad {
    pub week: u32,
    pub load: f64,
}

/// Where the day values came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Loaded(PathBuf),
    Synthetic,
    /// Handed over directly by library code.
    InMemory,
}

/// Where the year came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearOrigin {
    /// Declared by the caller.
    Given,
    /// Picked from the series length.
    Inferred,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub source: Option<PathBuf>,
    pub year: Option<i32>,
    pub show_week_load: bool,
    pub output: PathBuf,
    pub export: Option<PathBuf>,
    /// Seed for synthetic data; `None` draws from entropy.
    pub seed: Option<u64>,
}

/// ISO weekday number (1 = Monday .. 7 = Sunday).
pub fn iso_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule_matches_gregorian_calendar() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2019));
    }

    #[test]
    fn year_resolves_boundary_days() {
        let year = Year::new(2021).unwrap();
        assert_eq!(iso_weekday(year.first_day()), 5); // Friday
        assert_eq!(iso_weekday(year.last_day()), 5);
        assert_eq!(year.day_count(), 365);
        assert!(Year::new(2020).unwrap().accepts(366));
    }

    #[test]
    fn year_outside_chrono_range_is_rejected() {
        assert!(matches!(Year::new(i32::MAX), Err(SheetError::YearOutOfRange(_))));
    }

    #[test]
    fn series_rejects_partial_years() {
        assert!(matches!(DaySeries::new(vec![0.0; 364]), Err(SheetError::Size { found: 364 })));
        assert!(matches!(DaySeries::new(vec![0.0; 367]), Err(SheetError::Size { found: 367 })));
        assert_eq!(DaySeries::new(vec![1.0; 366]).unwrap().len(), 366);
    }

    #[test]
    fn series_range_ignores_nan() {
        let mut values = vec![1.0; 365];
        values[10] = f64::NAN;
        values[20] = 4.5;
        values[30] = -2.0;
        let series = DaySeries::new(values).unwrap();
        assert_eq!(series.max(), Some(4.5));
        assert_eq!(series.min(), Some(-2.0));
    }

    #[test]
    fn inferred_year_follows_series_length() {
        let common = DaySeries::new(vec![0.0; 365]).unwrap();
        let leap = DaySeries::new(vec![0.0; 366]).unwrap();
        assert_eq!(Year::inferred_from(&common).unwrap().value(), 2021);
        assert_eq!(Year::inferred_from(&leap).unwrap().value(), 2020);
    }
}
