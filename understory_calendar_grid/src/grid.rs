// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day-of-month to grid cell mapping for a single month.

use core::ops::RangeInclusive;

use chrono::Datelike;

use crate::CalendarDate;

/// Number of columns in a week row.
pub const DAYS_PER_WEEK: u32 = 7;

/// Offset that makes [`MonthGrid::day_at`] invert [`MonthGrid::cell_of`]
/// when columns are 0-based, as they are when derived from pixel positions.
///
/// With 1-based columns the matching offset is `1`.
pub const PIXEL_COLUMN_OFFSET: i32 = 2;

/// A 0-based cell of the 7-column week grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Week row, 0 for the row holding day 1.
    pub row: u32,
    /// Column, 0 for the first day of the week (Sunday).
    pub column: u32,
}

/// Layout facts of one month, derived from its year and month only.
///
/// Nothing here is stored by widgets; it is recomputed from the displayed
/// date whenever it is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days_in_month: u32,
    first_weekday: u32,
}

impl MonthGrid {
    /// Grid of the given month, if `month` is in `1..=12` and the year is
    /// representable.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        CalendarDate::new(year, month, 1).map(Self::for_date)
    }

    /// Grid of the month containing `date`.
    ///
    /// The first weekday is read from the first of the month, so the day
    /// field of `date` has no influence on the result.
    #[must_use]
    pub fn for_date(date: CalendarDate) -> Self {
        let first = date.first_of_month();
        Self {
            year: first.year(),
            month: first.month(),
            days_in_month: first.days_in_month(),
            first_weekday: first.naive().weekday().number_from_sunday(),
        }
    }

    /// Year of this grid.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of this grid, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in the month (28 to 31).
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Weekday of day 1, in `1..=7` with Sunday as `1`.
    #[must_use]
    pub fn first_weekday(&self) -> u32 {
        self.first_weekday
    }

    /// Legacy row count, `ceil((days_in_month + first_weekday) / 7) - 1`.
    ///
    /// Unless `days_in_month + first_weekday - 1` is a multiple of seven this
    /// is one less than the number of weeks the month touches. Size against
    /// [`MonthGrid::week_count`] to keep the final partial week on screen.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        (self.days_in_month + self.first_weekday)
            .div_ceil(DAYS_PER_WEEK)
            .saturating_sub(1)
    }

    /// Number of week rows the month touches, 4 to 6.
    ///
    /// This is the row of the last day plus one. Widgets size their body and
    /// hit grid against it.
    #[must_use]
    pub fn week_count(&self) -> u32 {
        (self.first_weekday - 1 + self.days_in_month).div_ceil(DAYS_PER_WEEK)
    }

    /// All days that are laid out, `1..=days_in_month`. The last day of the
    /// month is included.
    #[must_use]
    pub fn days(&self) -> RangeInclusive<u32> {
        1..=self.days_in_month
    }

    /// Returns `true` if `day` exists in this month.
    #[must_use]
    pub fn contains(&self, day: u32) -> bool {
        self.days().contains(&day)
    }

    /// Cell of `day`, with day 1 in column `first_weekday - 1` of row 0.
    #[must_use]
    pub fn cell_of(&self, day: u32) -> Option<GridCell> {
        if !self.contains(day) {
            return None;
        }
        let slot = self.first_weekday - 1 + day - 1;
        Some(GridCell {
            row: slot / DAYS_PER_WEEK,
            column: slot % DAYS_PER_WEEK,
        })
    }

    /// Day shown at `(row, column)`: `row * 7 + column - first_weekday + offset`.
    ///
    /// Returns `None` unless the result lies in `1..=days_in_month`. Use
    /// [`PIXEL_COLUMN_OFFSET`] for 0-based columns.
    #[must_use]
    pub fn day_at(&self, row: u32, column: u32, offset: i32) -> Option<u32> {
        let day = i64::from(row) * i64::from(DAYS_PER_WEEK) + i64::from(column)
            - i64::from(self.first_weekday)
            + i64::from(offset);
        u32::try_from(day).ok().filter(|day| self.contains(*day))
    }

    /// The date of `day` in this month.
    #[must_use]
    pub fn date(&self, day: u32) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(y: i32, m: u32) -> MonthGrid {
        MonthGrid::new(y, m).unwrap()
    }

    #[test]
    fn first_weekday_is_stable_across_days_of_month() {
        let expected = grid(2026, 10).first_weekday();
        for day in 1..=31 {
            let date = CalendarDate::new(2026, 10, day).unwrap();
            assert_eq!(MonthGrid::for_date(date).first_weekday(), expected);
        }
    }

    #[test]
    fn first_weekday_counts_from_sunday() {
        // 2026-02-01 is a Sunday, 2026-10-01 a Thursday.
        assert_eq!(grid(2026, 2).first_weekday(), 1);
        assert_eq!(grid(2026, 10).first_weekday(), 5);
    }

    #[test]
    fn thirty_days_starting_on_weekday_three() {
        // 2026-09-01 is a Tuesday and September has 30 days.
        let sept = grid(2026, 9);
        assert_eq!(sept.first_weekday(), 3);
        assert_eq!(sept.days_in_month(), 30);
        assert_eq!(sept.cell_of(1), Some(GridCell { row: 0, column: 2 }));
        assert_eq!(sept.row_count(), 4);
    }

    #[test]
    fn days_proceed_left_to_right_top_to_bottom() {
        let sept = grid(2026, 9);
        assert_eq!(sept.cell_of(5), Some(GridCell { row: 0, column: 6 }));
        assert_eq!(sept.cell_of(6), Some(GridCell { row: 1, column: 0 }));
        assert_eq!(sept.cell_of(30), Some(GridCell { row: 4, column: 3 }));
        assert_eq!(sept.cell_of(31), None);
        assert_eq!(sept.cell_of(0), None);
    }

    #[test]
    fn day_at_inverts_cell_of_with_pixel_offset() {
        for (y, m) in [(2026, 2), (2026, 9), (2024, 2), (2026, 8)] {
            let g = grid(y, m);
            for day in g.days() {
                let cell = g.cell_of(day).unwrap();
                assert_eq!(
                    g.day_at(cell.row, cell.column, PIXEL_COLUMN_OFFSET),
                    Some(day),
                    "{y}-{m} day {day}"
                );
                assert_eq!(g.day_at(cell.row, cell.column + 1, 1), Some(day));
            }
        }
    }

    #[test]
    fn day_at_rejects_out_of_range_cells() {
        let sept = grid(2026, 9);
        // Leading blanks before day 1.
        assert_eq!(sept.day_at(0, 0, PIXEL_COLUMN_OFFSET), None);
        assert_eq!(sept.day_at(0, 1, PIXEL_COLUMN_OFFSET), None);
        // Trailing blanks after day 30.
        assert_eq!(sept.day_at(4, 4, PIXEL_COLUMN_OFFSET), None);
        assert_eq!(sept.day_at(9, 0, PIXEL_COLUMN_OFFSET), None);
    }

    #[test]
    fn row_count_matches_full_weeks_for_aligned_months() {
        // February 2026 starts on Sunday and fills exactly four rows.
        let feb = grid(2026, 2);
        assert_eq!(feb.row_count(), 4);
        assert_eq!(feb.cell_of(28), Some(GridCell { row: 3, column: 6 }));
    }

    #[test]
    fn week_count_covers_the_last_day() {
        // September 2026 touches five weeks; the legacy count stops at four.
        let sept = grid(2026, 9);
        assert_eq!(sept.row_count(), 4);
        assert_eq!(sept.week_count(), 5);
        // August 2026 starts on Saturday and touches six.
        assert_eq!(grid(2026, 8).week_count(), 6);
        assert_eq!(grid(2026, 2).week_count(), 4);
        for m in 1..=12 {
            let g = grid(2026, m);
            let last = g.cell_of(g.days_in_month()).unwrap();
            assert_eq!(g.week_count(), last.row + 1, "2026-{m}");
        }
    }

    #[test]
    fn days_include_the_last_day() {
        assert_eq!(grid(2026, 9).days().last(), Some(30));
        assert_eq!(grid(2026, 2).days().count(), 28);
    }

    #[test]
    fn new_rejects_invalid_month() {
        assert!(MonthGrid::new(2026, 0).is_none());
        assert!(MonthGrid::new(2026, 13).is_none());
    }
}
