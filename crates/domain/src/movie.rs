// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date::{MovieDate, release_dates};
use crate::error::DomainError;
use crate::movie_time::MovieTime;
use crate::picked_seats::PickedSeats;
use crate::pricing::TicketPrice;
use crate::reservation::Reservation;
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};

/// A movie and its screening period.
///
/// Opaque to the booking engine apart from the screening period, which
/// bounds the calendar window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    /// The movie title.
    pub title: String,
    /// First screening date (inclusive).
    pub start_date: MovieDate,
    /// Last screening date (inclusive).
    pub end_date: MovieDate,
    /// Running time in minutes.
    pub running_time_minutes: u16,
}

impl Movie {
    #[must_use]
    pub fn new(
        title: &str,
        start_date: MovieDate,
        end_date: MovieDate,
        running_time_minutes: u16,
    ) -> Self {
        Self {
            title: title.to_string(),
            start_date,
            end_date,
            running_time_minutes,
        }
    }

    /// Dates on which this movie can still be booked as of `today`.
    #[must_use]
    pub fn release_dates(&self, today: MovieDate) -> Vec<MovieDate> {
        release_dates(self.start_date, self.end_date, today)
    }

    /// Checks that `date` lies in the calendar window: from the later of
    /// `today` and the first screening date, up to the last screening date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutOfRange` if it does not.
    pub fn check_bookable_date(
        &self,
        date: MovieDate,
        today: MovieDate,
    ) -> Result<(), DomainError> {
        date.check_in_range(today.max(self.start_date), self.end_date)
    }

    /// Builds a reservation for this movie.
    ///
    /// # Errors
    ///
    /// See [`Reservation::new`].
    pub fn reserve(
        &self,
        theater: Theater,
        date: Option<MovieDate>,
        time: Option<MovieTime>,
        ticket: Ticket,
        seats: PickedSeats,
        price: TicketPrice,
    ) -> Result<Reservation, DomainError> {
        Reservation::new(self.clone(), theater, date, time, ticket, seats, price)
    }
}

/// The theater a movie is booked at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theater {
    /// Display name.
    pub name: String,
}

impl Theater {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
