//! Month grid computation.
//!
//! [`build`] turns a (year, month) pair into a [`CalendarGrid`]: a run of
//! blank cells aligning day 1 under its weekday column (Monday first),
//! followed by every day of the month, plus the neighbouring months used
//! for navigation.

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

/// Columns per grid row, Monday through Sunday.
pub const DAYS_PER_WEEK: usize = 7;

/// A (year, month) pair with `month` in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    /// Validate a raw month number and pair it with `year`.
    ///
    /// The month is checked first. A year outside `i32` is reported as
    /// [`CalendarError::DateOutOfRange`], not as invalid input.
    pub fn new(year: i64, month: i64) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let month = month as u32;
        let year = i32::try_from(year).map_err(|_| CalendarError::DateOutOfRange { year, month })?;

        Ok(MonthRef { year, month })
    }

    /// The month a given date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        MonthRef {
            year: date.year(),
            month: date.month(),
        }
    }

    /// English month name, e.g. "June".
    pub fn name(&self) -> &'static str {
        Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or_default()
    }

    pub fn previous(self) -> CalendarResult<Self> {
        if self.month == 1 {
            let year = self.year.checked_sub(1).ok_or_else(|| self.out_of_range())?;
            Ok(MonthRef { year, month: 12 })
        } else {
            Ok(MonthRef {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    pub fn next(self) -> CalendarResult<Self> {
        if self.month == 12 {
            let year = self.year.checked_add(1).ok_or_else(|| self.out_of_range())?;
            Ok(MonthRef { year, month: 1 })
        } else {
            Ok(MonthRef {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    fn out_of_range(self) -> CalendarError {
        CalendarError::DateOutOfRange {
            year: self.year.into(),
            month: self.month,
        }
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// One slot of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Filler before the 1st of the month.
    Blank,
    /// A day of the month, starting at 1.
    Day(u32),
}

impl Cell {
    /// Day number, or `None` for a blank.
    pub fn day(&self) -> Option<u32> {
        match self {
            Cell::Blank => None,
            Cell::Day(d) => Some(*d),
        }
    }

}

/// A computed month view. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: MonthRef,
    cells: Vec<Cell>,
    leading_blanks: usize,
    days_in_month: u32,
    previous: MonthRef,
    next: MonthRef,
}

impl CalendarGrid {
    pub fn year(&self) -> i32 {
        self.month.year
    }

    pub fn month(&self) -> u32 {
        self.month.month
    }

    pub fn month_ref(&self) -> MonthRef {
        self.month
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Weekday index (Monday = 0) of the 1st, i.e. the number of blanks.
    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn previous(&self) -> MonthRef {
        self.previous
    }

    pub fn next(&self) -> MonthRef {
        self.next
    }

    /// Cells split into rows of [`DAYS_PER_WEEK`]. The last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Build the grid for `year`/`month`.
///
/// Only `month` is validated. A `year` the date library cannot represent
/// yields [`CalendarError::DateOutOfRange`].
pub fn build(year: i64, month: i64) -> CalendarResult<CalendarGrid> {
    let target = MonthRef::new(year, month)?;

    let first = NaiveDate::from_ymd_opt(target.year, target.month, 1)
        .ok_or_else(|| target.out_of_range())?;
    let leading_blanks = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(target.year, target.month);

    let mut cells = Vec::with_capacity(leading_blanks + days as usize);
    cells.resize(leading_blanks, Cell::Blank);
    cells.extend((1..=days).map(Cell::Day));

    Ok(CalendarGrid {
        month: target,
        cells,
        leading_blanks,
        days_in_month: days,
        previous: target.previous()?,
        next: target.next()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> MonthRef {
        MonthRef { year, month }
    }

    #[test]
    fn february_follows_gregorian_leap_rule() {
        assert_eq!(build(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(build(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(build(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(build(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn january_2024_starts_on_monday() {
        let grid = build(2024, 1).unwrap();

        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.cells()[0], Cell::Day(1));
        assert_eq!(grid.cells().len(), 31);
    }

    #[test]
    fn june_2024_starts_on_saturday() {
        let grid = build(2024, 6).unwrap();

        assert_eq!(grid.leading_blanks(), 5);
        assert_eq!(grid.days_in_month(), 30);
        assert!(grid.cells()[..5].iter().all(|c| c.day().is_none()));
        assert_eq!(grid.cells()[5], Cell::Day(1));
        assert_eq!(grid.cells().last(), Some(&Cell::Day(30)));
    }

    #[test]
    fn sunday_start_has_six_blanks() {
        // 2024-09-01 is a Sunday.
        let grid = build(2024, 9).unwrap();
        assert_eq!(grid.leading_blanks(), 6);
        assert_eq!(grid.cells().len(), 36);
    }

    #[test]
    fn navigation_wraps_year_boundaries() {
        assert_eq!(build(2024, 1).unwrap().previous(), month(2023, 12));
        assert_eq!(build(2024, 12).unwrap().next(), month(2025, 1));
        assert_eq!(build(2024, 6).unwrap().previous(), month(2024, 5));
        assert_eq!(build(2024, 6).unwrap().next(), month(2024, 7));
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert_eq!(build(2024, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(build(2024, 13), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(build(2024, -3), Err(CalendarError::InvalidMonth(-3)));
    }

    #[test]
    fn unrepresentable_year_is_date_out_of_range() {
        let err = build(i32::MAX.into(), 12).unwrap_err();
        assert_eq!(
            err,
            CalendarError::DateOutOfRange {
                year: i32::MAX.into(),
                month: 12
            }
        );
    }

    #[test]
    fn year_beyond_i32_is_date_out_of_range() {
        assert_eq!(
            build(99_999_999_999, 1),
            Err(CalendarError::DateOutOfRange {
                year: 99_999_999_999,
                month: 1
            })
        );
        assert!(matches!(
            build(i64::MIN, 6),
            Err(CalendarError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn invalid_month_checked_before_year() {
        assert_eq!(build(i32::MAX.into(), 13), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(
            build(2024, 99_999_999_999),
            Err(CalendarError::InvalidMonth(99_999_999_999))
        );
        assert_eq!(
            build(i64::MAX, 0),
            Err(CalendarError::InvalidMonth(0))
        );
    }

    #[test]
    fn navigation_at_i32_edges_reports_out_of_range() {
        let last = month(i32::MAX, 12);
        assert_eq!(
            last.next(),
            Err(CalendarError::DateOutOfRange {
                year: i32::MAX.into(),
                month: 12
            })
        );
        assert_eq!(last.previous(), Ok(month(i32::MAX, 11)));

        let first = month(i32::MIN, 1);
        assert_eq!(
            first.previous(),
            Err(CalendarError::DateOutOfRange {
                year: i32::MIN.into(),
                month: 1
            })
        );
        assert_eq!(first.next(), Ok(month(i32::MIN, 2)));
    }

    #[test]
    fn grid_shape_holds_across_four_centuries() {
        for year in 1800..=2200 {
            for m in 1..=12 {
                let grid = build(year, m).unwrap();
                assert_eq!(
                    grid.cells().len(),
                    grid.leading_blanks() + grid.days_in_month() as usize,
                    "{year}-{m}"
                );

                let days: Vec<u32> = grid.cells().iter().filter_map(Cell::day).collect();
                let expected: Vec<u32> = (1..=grid.days_in_month()).collect();
                assert_eq!(days, expected, "{year}-{m}");

                assert!(
                    grid.cells()[..grid.leading_blanks()]
                        .iter()
                        .all(|c| *c == Cell::Blank)
                );
            }
        }
    }

    #[test]
    fn days_in_month_agrees_with_chrono() {
        for year in [1600, 1700, 1900, 1999, 2000, 2023, 2024, 2100, 2400] {
            for m in 1..=12u32 {
                let first = NaiveDate::from_ymd_opt(year, m, 1).unwrap();
                let next_first = if m == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, m + 1, 1).unwrap()
                };
                let expected = (next_first - first).num_days() as u32;
                assert_eq!(days_in_month(year, m), expected, "{year}-{m}");
            }
        }
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        for year in [1, 1999, 2024, 9999] {
            for m in 1..=12 {
                let grid = build(year, m).unwrap();
                let next = grid.next();
                let back = build(next.year.into(), next.month.into()).unwrap().previous();
                assert_eq!(back, grid.month_ref());
            }
        }
    }

    #[test]
    fn weeks_split_into_rows_of_seven() {
        // 2024-02-01 is a Thursday: 3 blanks + 29 days = 32 cells.
        let grid = build(2024, 2).unwrap();
        let rows: Vec<&[Cell]> = grid.weeks().collect();

        assert_eq!(rows.len(), 5);
        assert!(rows[..4].iter().all(|r| r.len() == DAYS_PER_WEEK));
        assert_eq!(rows[0][..4], [Cell::Blank, Cell::Blank, Cell::Blank, Cell::Day(1)]);
        assert_eq!(
            rows[4],
            &[Cell::Day(26), Cell::Day(27), Cell::Day(28), Cell::Day(29)]
        );

        let june = build(2024, 6).unwrap();
        assert!(june.weeks().all(|r| r.len() == DAYS_PER_WEEK));
    }

    #[test]
    fn month_name_and_display() {
        let grid = build(2024, 6).unwrap();
        assert_eq!(grid.month_name(), "June");
        assert_eq!(grid.month_ref().to_string(), "2024-06");
        assert_eq!(grid.previous().name(), "May");
        assert_eq!(MonthRef::new(-44, 3).unwrap().to_string(), "-44-03");
    }

    #[test]
    fn containing_uses_date_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(MonthRef::containing(date), month(2024, 6));
    }
}
