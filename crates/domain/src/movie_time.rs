// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::format_description;

/// A screening start time (hour and minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeParts", into = "TimeParts")]
pub struct MovieTime {
    time: Time,
}

/// Wire shape of a `MovieTime`.
#[derive(Serialize, Deserialize)]
struct TimeParts {
    hour: u8,
    minute: u8,
}

impl TryFrom<TimeParts> for MovieTime {
    type Error = DomainError;

    fn try_from(parts: TimeParts) -> Result<Self, Self::Error> {
        Self::new(parts.hour, parts.minute)
    }
}

impl From<MovieTime> for TimeParts {
    fn from(time: MovieTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl MovieTime {
    /// Creates a new `MovieTime`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTime` if `hour >= 24` or `minute >= 60`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        Time::from_hms(hour, minute, 0)
            .map(Self::from_time)
            .map_err(|_| DomainError::InvalidTime { hour, minute })
    }

    /// Wraps a `time::Time`, dropping seconds and below.
    #[must_use]
    pub fn from_time(time: Time) -> Self {
        Self {
            time: Time::from_hms(time.hour(), time.minute(), 0).unwrap_or(time),
        }
    }

    /// Parses an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ParseError` if the string is not a valid 24-hour time.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Time::parse(input, format_description!("[hour]:[minute]"))
            .map(Self::from_time)
            .map_err(|e| DomainError::ParseError {
                input: input.to_string(),
                error: e.to_string(),
            })
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_of_day(&self) -> u16 {
        u16::from(self.hour()) * 60 + u16::from(self.minute())
    }

    /// Returns the underlying `time::Time`.
    #[must_use]
    pub const fn as_time(&self) -> Time {
        self.time
    }
}

impl std::fmt::Display for MovieTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
