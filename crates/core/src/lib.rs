// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use cineseat_domain::{DomainError, MovieDate, MovieTime};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{BookingRules, BookingSession, SessionEvent, TransitionResult};

/// Lists the screening times a session may pick on its selected date.
///
/// This is a read-only query that does not change the session.
///
/// # Errors
///
/// Returns `DomainError::MissingDate` if no date has been selected.
pub fn available_times(
    rules: &BookingRules,
    session: &BookingSession,
) -> Result<Vec<MovieTime>, DomainError> {
    let date: MovieDate = session.date.ok_or(DomainError::MissingDate)?;
    Ok(rules.schedule.times_for(date))
}

/// Lists the dates a session may pick as of `today`.
#[must_use]
pub fn available_dates(session: &BookingSession, today: MovieDate) -> Vec<MovieDate> {
    session.movie.release_dates(today)
}
