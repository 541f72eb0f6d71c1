//! Day → (week, weekday) placement.
//!
//! The sheet has 53 columns:
//!
//! - column 0 holds the days before the first Monday (a partial week)
//! - columns 1..=51 hold seven days each
//! - column 52 holds the days from the last Monday onwards
//!
//! This is a fixed model, not ISO week numbering. It partitions every common
//! year exactly, and every leap year except those starting on a Sunday, where
//! it comes up seven days short. That case is reported as
//! `SheetError::InternalConsistency`.

use chrono::Datelike;
use tracing::debug;

use crate::domain::{GridCoordinate, Year, iso_weekday};
use crate::error::SheetError;

/// Number of full seven-day columns between the two partial weeks.
pub const INNER_WEEKS: u32 = 51;
/// Column index of the trailing partial week.
pub const LAST_WEEK: u32 = INNER_WEEKS + 1;
const DAYS_PER_WEEK: u32 = 7;

/// Days in column 0: Monday → 7 down to Sunday → 1.
pub fn first_week_days(year: &Year) -> u32 {
    DAYS_PER_WEEK - year.first_day().weekday().num_days_from_monday()
}

/// Days in column 52: the ISO weekday of Dec 31.
pub fn last_week_days(year: &Year) -> u32 {
    iso_weekday(year.last_day())
}

/// Week column of every day, in chronological order.
pub fn week_indices(year: &Year) -> Vec<u32> {
    let first = first_week_days(year);
    let last = last_week_days(year);

    let mut out = Vec::with_capacity((first + INNER_WEEKS * DAYS_PER_WEEK + last) as usize);
    out.extend(std::iter::repeat_n(0, first as usize));
    for week in 1..=INNER_WEEKS {
        out.extend(std::iter::repeat_n(week, DAYS_PER_WEEK as usize));
    }
    out.extend(std::iter::repeat_n(LAST_WEEK, last as usize));
    out
}

/// Weekday row of every day, in chronological order.
///
/// Rows restart at 1 in every column, including the partial ones.
pub fn weekday_indices(year: &Year) -> Vec<u32> {
    let first = first_week_days(year);
    let last = last_week_days(year);

    let mut out = Vec::with_capacity((first + INNER_WEEKS * DAYS_PER_WEEK + last) as usize);
    out.extend(1..=first);
    for _ in 0..INNER_WEEKS {
        out.extend(1..=DAYS_PER_WEEK);
    }
    out.extend(1..=last);
    out
}

/// Validated placement for a year and a series length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    first_week_days: u32,
    last_week_days: u32,
    weeks: Vec<u32>,
    weekdays: Vec<u32>,
}

impl GridLayout {
    /// Lay out `days` values for `year`.
    ///
    /// Fails when the column model does not produce exactly `days` cells.
    pub fn new(year: &Year, days: usize) -> Result<Self, SheetError> {
        let weeks = week_indices(year);
        let weekdays = weekday_indices(year);

        for layout in [weeks.len(), weekdays.len()] {
            if layout != days {
                return Err(SheetError::InternalConsistency {
                    year: year.value(),
                    layout,
                    days,
                });
            }
        }

        let layout = Self {
            first_week_days: first_week_days(year),
            last_week_days: last_week_days(year),
            weeks,
            weekdays,
        };
        debug!(
            year = year.value(),
            first_week_days = layout.first_week_days,
            last_week_days = layout.last_week_days,
            "grid layout computed"
        );
        Ok(layout)
    }

    pub fn first_week_days(&self) -> u32 {
        self.first_week_days
    }

    pub fn last_week_days(&self) -> u32 {
        self.last_week_days
    }

    pub fn week_indices(&self) -> &[u32] {
        &self.weeks
    }

    pub fn weekday_indices(&self) -> &[u32] {
        &self.weekdays
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = GridCoordinate> + '_ {
        self.weeks
            .iter()
            .zip(&self.weekdays)
            .map(|(&week, &weekday)| GridCoordinate { week, weekday })
    }
}
