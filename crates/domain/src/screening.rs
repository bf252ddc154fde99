// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Screening start times offered on a date.
//!
//! Weekends open earlier than weekdays. From the first showing, start times
//! repeat at a fixed interval until the end of the day.

use crate::date::MovieDate;
use crate::error::DomainError;
use crate::movie_time::MovieTime;
use serde::{Deserialize, Serialize};
use time::macros::time;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// The daily screening timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleParts", into = "ScheduleParts")]
pub struct ScreeningSchedule {
    weekday_first: MovieTime,
    weekend_first: MovieTime,
    interval_minutes: u16,
}

#[derive(Serialize, Deserialize)]
struct ScheduleParts {
    weekday_first: MovieTime,
    weekend_first: MovieTime,
    interval_minutes: u16,
}

impl TryFrom<ScheduleParts> for ScreeningSchedule {
    type Error = DomainError;

    fn try_from(parts: ScheduleParts) -> Result<Self, Self::Error> {
        Self::new(
            parts.weekday_first,
            parts.weekend_first,
            parts.interval_minutes,
        )
    }
}

impl From<ScreeningSchedule> for ScheduleParts {
    fn from(schedule: ScreeningSchedule) -> Self {
        Self {
            weekday_first: schedule.weekday_first,
            weekend_first: schedule.weekend_first,
            interval_minutes: schedule.interval_minutes,
        }
    }
}

impl Default for ScreeningSchedule {
    /// Weekdays from 10:00, weekends from 09:00, every two hours.
    fn default() -> Self {
        Self {
            weekday_first: MovieTime::from_time(time!(10:00)),
            weekend_first: MovieTime::from_time(time!(9:00)),
            interval_minutes: 120,
        }
    }
}

impl ScreeningSchedule {
    /// Creates a new `ScreeningSchedule`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScreeningInterval` unless the interval is
    /// between 1 minute and one day.
    pub const fn new(
        weekday_first: MovieTime,
        weekend_first: MovieTime,
        interval_minutes: u16,
    ) -> Result<Self, DomainError> {
        if interval_minutes == 0 || interval_minutes > MINUTES_PER_DAY {
            return Err(DomainError::InvalidScreeningInterval { interval_minutes });
        }
        Ok(Self {
            weekday_first,
            weekend_first,
            interval_minutes,
        })
    }

    #[must_use]
    pub const fn weekday_first(&self) -> MovieTime {
        self.weekday_first
    }

    #[must_use]
    pub const fn weekend_first(&self) -> MovieTime {
        self.weekend_first
    }

    #[must_use]
    pub const fn interval_minutes(&self) -> u16 {
        self.interval_minutes
    }

    /// Start times offered on `date`, ascending.
    #[must_use]
    pub fn times_for(&self, date: MovieDate) -> Vec<MovieTime> {
        let first: MovieTime = if date.is_weekend() {
            self.weekend_first
        } else {
            self.weekday_first
        };

        (first.minutes_of_day()..MINUTES_PER_DAY)
            .step_by(usize::from(self.interval_minutes))
            .filter_map(|minutes| {
                let hour: u8 = u8::try_from(minutes / 60).ok()?;
                let minute: u8 = u8::try_from(minutes % 60).ok()?;
                MovieTime::new(hour, minute).ok()
            })
            .collect()
    }

    /// Checks that `time` is offered on `date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeNotScheduled` if it is not.
    pub fn check_scheduled(&self, date: MovieDate, time: MovieTime) -> Result<(), DomainError> {
        if !self.times_for(date).contains(&time) {
            return Err(DomainError::TimeNotScheduled { date, time });
        }
        Ok(())
    }
}
