// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Screening dates and the calendar window of bookable dates.
//!
//! ## Invariants
//!
//! - A `MovieDate` always holds a real calendar date
//! - The calendar window never yields a date before "today"
//! - The calendar window is a pure function of its three inputs

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, Weekday};

/// Days of the month on which the day discount applies.
const DISCOUNT_DAYS: [u8; 3] = [10, 20, 30];

/// A calendar date on which a movie may be screened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct MovieDate {
    date: Date,
}

/// Wire shape of a `MovieDate`.
#[derive(Serialize, Deserialize)]
struct DateParts {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<DateParts> for MovieDate {
    type Error = DomainError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month, parts.day)
    }
}

impl From<MovieDate> for DateParts {
    fn from(date: MovieDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl MovieDate {
    /// Creates a new `MovieDate`.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year
    /// * `month` - The month (1-12)
    /// * `day` - The day of the month (1-31)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the triple is not a real calendar date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDate { year, month, day };
        let month_value: Month = Month::try_from(month).map_err(|_| invalid())?;
        let date: Date =
            Date::from_calendar_date(year, month_value, day).map_err(|_| invalid())?;
        Ok(Self { date })
    }

    /// Wraps an already valid `time::Date`.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self { date }
    }

    /// Returns the current date in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self::from_date(OffsetDateTime::now_utc().date())
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ParseError` if the string is not a valid ISO 8601 date.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(Self::from_date)
            .map_err(|e| DomainError::ParseError {
                input: input.to_string(),
                error: e.to_string(),
            })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    #[must_use]
    pub fn month(&self) -> u8 {
        u8::from(self.date.month())
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn as_date(&self) -> Date {
        self.date
    }

    /// Returns whether the date falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns whether this date is `today`.
    #[must_use]
    pub fn is_today_at(&self, today: Self) -> bool {
        *self == today
    }

    /// Returns whether this date is the current UTC date.
    #[must_use]
    pub fn is_today(&self) -> bool {
        self.is_today_at(Self::today())
    }

    /// Returns whether the day discount applies (the 10th, 20th and 30th).
    #[must_use]
    pub fn is_discountable(&self) -> bool {
        DISCOUNT_DAYS.contains(&self.day())
    }

    /// Checks that the date lies within `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutOfRange` if the date is outside the period.
    pub fn check_in_range(&self, start: Self, end: Self) -> Result<(), DomainError> {
        if *self < start || *self > end {
            return Err(DomainError::DateOutOfRange {
                date: *self,
                start,
                end,
            });
        }
        Ok(())
    }

    /// Returns the following calendar day, or `None` at the end of the representable range.
    #[must_use]
    pub fn next_day(&self) -> Option<Self> {
        self.date.next_day().map(Self::from_date)
    }
}

impl std::fmt::Display for MovieDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

/// Computes the dates on which a movie may be booked.
///
/// # Arguments
///
/// * `from` - First screening date (inclusive)
/// * `to` - Last screening date (inclusive)
/// * `today` - The reference "today"
///
/// # Returns
///
/// Every date from `max(today, from)` through `to` in ascending order, or an
/// empty vector if `today` is already past `to`.
///
/// The range itself is not validated. `today` is clamped against `from` only,
/// so a reversed range starts at `from` and produces no dates.
#[must_use]
pub fn release_dates(from: MovieDate, to: MovieDate, today: MovieDate) -> Vec<MovieDate> {
    if today > to {
        return Vec::new();
    }

    std::iter::successors(Some(today.max(from)), MovieDate::next_day)
        .take_while(|date| *date <= to)
        .collect()
}

/// Computes the bookable dates using the current UTC date as "today".
#[must_use]
pub fn release_dates_from_today(from: MovieDate, to: MovieDate) -> Vec<MovieDate> {
    release_dates(from, to, MovieDate::today())
}
