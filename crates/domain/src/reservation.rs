// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The confirmed reservation.
//!
//! ## Invariants
//!
//! - A reservation always has a date and a time
//! - The number of seats equals the ticket count
//! - Once built, a reservation never changes; deserialisation re-checks both rules
//!
//! The price is a record of what was charged at confirmation. Deserialisation
//! keeps it as stored; [`Reservation::check_price`] re-prices a restored
//! reservation against a set of discount rules.

use crate::date::MovieDate;
use crate::discount::{DiscountPolicy, DiscountRules};
use crate::error::DomainError;
use crate::movie::{Movie, Theater};
use crate::movie_time::MovieTime;
use crate::picked_seats::PickedSeats;
use crate::pricing::{TicketPrice, calculate_total_price};
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};
use time::{Duration, PrimitiveDateTime};

/// An immutable, confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ReservationParts", into = "ReservationParts")]
pub struct Reservation {
    movie: Movie,
    theater: Theater,
    date: MovieDate,
    time: MovieTime,
    ticket: Ticket,
    seats: PickedSeats,
    price: TicketPrice,
}

#[derive(Serialize, Deserialize)]
struct ReservationParts {
    movie: Movie,
    theater: Theater,
    date: MovieDate,
    time: MovieTime,
    ticket: Ticket,
    seats: PickedSeats,
    price: TicketPrice,
}

impl TryFrom<ReservationParts> for Reservation {
    type Error = DomainError;

    fn try_from(parts: ReservationParts) -> Result<Self, Self::Error> {
        Self::new(
            parts.movie,
            parts.theater,
            Some(parts.date),
            Some(parts.time),
            parts.ticket,
            parts.seats,
            parts.price,
        )
    }
}

impl From<Reservation> for ReservationParts {
    fn from(reservation: Reservation) -> Self {
        Self {
            movie: reservation.movie,
            theater: reservation.theater,
            date: reservation.date,
            time: reservation.time,
            ticket: reservation.ticket,
            seats: reservation.seats,
            price: reservation.price,
        }
    }
}

impl Reservation {
    /// Creates a new `Reservation`.
    ///
    /// # Arguments
    ///
    /// * `movie` - The movie being booked
    /// * `theater` - The theater
    /// * `date` - The selected screening date
    /// * `time` - The selected screening time
    /// * `ticket` - The ticket count
    /// * `seats` - The picked seats
    /// * `price` - The total price from the pricing engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No date was selected (`MissingDate`)
    /// - No time was selected (`MissingTime`)
    /// - The seat count differs from the ticket count (`SeatCountMismatch`)
    pub fn new(
        movie: Movie,
        theater: Theater,
        date: Option<MovieDate>,
        time: Option<MovieTime>,
        ticket: Ticket,
        seats: PickedSeats,
        price: TicketPrice,
    ) -> Result<Self, DomainError> {
        let date: MovieDate = date.ok_or(DomainError::MissingDate)?;
        let time: MovieTime = time.ok_or(DomainError::MissingTime)?;

        if seats.len() != usize::from(ticket.count()) {
            return Err(DomainError::SeatCountMismatch {
                expected: ticket.count(),
                actual: seats.len(),
            });
        }

        Ok(Self {
            movie,
            theater,
            date,
            time,
            ticket,
            seats,
            price,
        })
    }

    #[must_use]
    pub const fn movie(&self) -> &Movie {
        &self.movie
    }

    #[must_use]
    pub const fn theater(&self) -> &Theater {
        &self.theater
    }

    #[must_use]
    pub const fn date(&self) -> MovieDate {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> MovieTime {
        self.time
    }

    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    #[must_use]
    pub const fn seats(&self) -> &PickedSeats {
        &self.seats
    }

    #[must_use]
    pub const fn price(&self) -> TicketPrice {
        self.price
    }

    /// The screening start as a local date-time.
    #[must_use]
    pub const fn showtime(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date.as_date(), self.time.as_time())
    }

    /// When a reminder should fire: `lead_minutes` before the showtime.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the result is not representable.
    pub fn reminder_at(&self, lead_minutes: u16) -> Result<PrimitiveDateTime, DomainError> {
        self.showtime()
            .checked_sub(Duration::minutes(i64::from(lead_minutes)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: String::from("calculating reservation reminder time"),
            })
    }

    /// Checks the stored price against the pricing engine.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PriceMismatch` if pricing the reservation's seats,
    /// date and time under `discounts` gives a different total.
    pub fn check_price(
        &self,
        base_price_per_seat: u64,
        discounts: &DiscountRules,
    ) -> Result<(), DomainError> {
        let policies: Vec<DiscountPolicy> =
            discounts.policies_for(Some(self.date), Some(self.time));
        let expected: TicketPrice =
            calculate_total_price(&self.seats, base_price_per_seat, &policies);

        if expected != self.price {
            return Err(DomainError::PriceMismatch {
                expected: expected.amount(),
                actual: self.price.amount(),
            });
        }
        Ok(())
    }
}
