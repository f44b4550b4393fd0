// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar dates without a time-of-day component.

use core::fmt;

use chrono::{Datelike, Month, Months, NaiveDate};

/// Direction of a one-month navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MonthStep {
    /// Move to the month before the displayed one.
    Previous,
    /// Move to the month after the displayed one.
    Next,
}

impl MonthStep {
    /// Signed month delta of this step.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// A `(year, month, day)` value.
///
/// The date carries no time-of-day and no zone, so two dates compare equal
/// exactly when they name the same calendar day. Widgets decide which zone
/// "today" is read in; see [`CalendarDate::today_local`] and
/// [`CalendarDate::today_utc`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date if `(year, month, day)` names a real calendar day.
    ///
    /// `month` is 1-based.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an existing [`NaiveDate`].
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying [`NaiveDate`].
    #[must_use]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-based.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1-based.
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns `true` if both dates name the same calendar day.
    #[must_use]
    pub fn is_same_day(self, other: Self) -> bool {
        self == other
    }

    /// The first day of this date's month.
    #[must_use]
    pub fn first_of_month(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// The same month with the day replaced, if that day exists.
    #[must_use]
    pub fn with_day(self, day: u32) -> Option<Self> {
        self.0.with_day(day).map(Self)
    }

    /// Number of days in this date's month (28 to 31).
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        self.first_of_month()
            .0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Adds a signed number of months.
    ///
    /// The day is clamped to the length of the target month, so January 31st
    /// plus one month is the last day of February. Results outside the
    /// representable range leave the date unchanged.
    #[must_use]
    pub fn add_months(self, months: i32) -> Self {
        let magnitude = Months::new(months.unsigned_abs());
        let moved = if months >= 0 {
            self.0.checked_add_months(magnitude)
        } else {
            self.0.checked_sub_months(magnitude)
        };
        moved.map_or(self, Self)
    }

    /// Moves one month in the given direction.
    #[must_use]
    pub fn step(self, step: MonthStep) -> Self {
        self.add_months(step.delta())
    }

    /// English name of this date's month.
    #[must_use]
    pub fn month_name(self) -> &'static str {
        u8::try_from(self.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }

    /// Displayable month title, for example `March 2026`.
    #[must_use]
    pub fn title(self) -> MonthTitle {
        MonthTitle(self)
    }

    /// Today in the local zone of the host.
    #[cfg(feature = "clock")]
    #[must_use]
    pub fn today_local() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Today in UTC.
    #[cfg(feature = "clock")]
    #[must_use]
    pub fn today_utc() -> Self {
        Self(chrono::Utc::now().date_naive())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// `Month Year` title of a date's month, formatted without allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthTitle(CalendarDate);

impl fmt::Display for MonthTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.month_name(), self.0.year())
    }
}
