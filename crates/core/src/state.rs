// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cineseat_domain::{
    DiscountPolicy, DiscountRules, DomainError, Movie, MovieDate, MovieTime, PickedSeats,
    PriceBreakdown, Reservation, ScreeningSchedule, SeatGrid, Theater, Ticket, TicketPrice,
    price_breakdown,
};
use serde::{Deserialize, Serialize};

/// The fixed rules a booking session runs under.
///
/// Shared read-only by every session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRules {
    /// The theater seat grid.
    pub grid: SeatGrid,
    /// Price of one seat before discounts.
    pub base_price_per_seat: u64,
    /// Enabled discounts.
    pub discounts: DiscountRules,
    /// Daily screening timetable.
    pub schedule: ScreeningSchedule,
}

impl BookingRules {
    /// The discount policies bound to a session's current date and time.
    #[must_use]
    pub fn policies_for(&self, session: &BookingSession) -> Vec<DiscountPolicy> {
        self.discounts.policies_for(session.date, session.time)
    }
}

/// The in-progress booking of one user for one movie.
///
/// The session is a value: transitions produce a new session, and the whole
/// session can be serialised to save and restore progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSession {
    /// The movie being booked.
    pub movie: Movie,
    /// The theater.
    pub theater: Theater,
    /// The ticket count.
    pub ticket: Ticket,
    /// The selected screening date, if any.
    pub date: Option<MovieDate>,
    /// The selected screening time, if any.
    pub time: Option<MovieTime>,
    /// The seats picked so far.
    #[serde(default)]
    pub picked: PickedSeats,
}

impl BookingSession {
    /// Starts a session with one ticket and nothing selected.
    #[must_use]
    pub fn new(movie: Movie, theater: Theater) -> Self {
        Self {
            movie,
            theater,
            ticket: Ticket::default(),
            date: None,
            time: None,
            picked: PickedSeats::new(),
        }
    }

    /// Returns whether both a date and a time have been selected.
    #[must_use]
    pub const fn is_date_time_selected(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Returns whether confirming would produce a reservation.
    #[must_use]
    pub fn is_ready_to_confirm(&self) -> bool {
        self.is_date_time_selected() && self.picked.len() == usize::from(self.ticket.count())
    }

    /// Checks the session against the booking rules.
    ///
    /// Runs at the start of every transition, since a restored session is
    /// client input.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket count exceeds the grid capacity (`InvalidTicketCount`)
    /// - More seats are picked than the ticket allows (`TicketBelowPickedSeats`)
    /// - A picked seat is outside the grid (`SeatOutOfGrid`)
    /// - A time is selected without a date (`MissingDate`)
    /// - The date is outside the calendar window (`DateOutOfRange`)
    /// - The time is not offered on the date (`TimeNotScheduled`)
    pub fn check(&self, rules: &BookingRules, today: MovieDate) -> Result<(), DomainError> {
        let capacity: u16 = rules.grid.capacity();
        if self.ticket.count() > capacity {
            return Err(DomainError::InvalidTicketCount {
                count: self.ticket.count(),
                max: capacity,
            });
        }

        if self.picked.len() > usize::from(self.ticket.count()) {
            return Err(DomainError::TicketBelowPickedSeats {
                count: self.ticket.count(),
                picked: self.picked.len(),
            });
        }

        for seat in self.picked.iter() {
            rules.grid.check_contains(seat)?;
        }

        match (self.date, self.time) {
            (Some(date), time) => {
                self.movie.check_bookable_date(date, today)?;
                if let Some(time) = time {
                    rules.schedule.check_scheduled(date, time)?;
                }
            }
            (None, Some(_)) => return Err(DomainError::MissingDate),
            (None, None) => {}
        }

        Ok(())
    }

    /// Prices the current selection.
    #[must_use]
    pub fn quote(&self, rules: &BookingRules) -> PriceBreakdown {
        price_breakdown(
            &self.picked,
            rules.base_price_per_seat,
            &rules.policies_for(self),
        )
    }
}

/// A record of what a transition did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// The command name.
    pub action: String,
    /// Human-readable details.
    pub details: Option<String>,
}

impl SessionEvent {
    #[must_use]
    pub fn new(action: &str, details: Option<String>) -> Self {
        Self {
            action: action.to_string(),
            details,
        }
    }
}

/// The result of a successful session transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session after the transition.
    pub new_state: BookingSession,
    /// What happened.
    pub event: SessionEvent,
    /// The total price of the new state.
    pub price: TicketPrice,
    /// The reservation, set only by `Confirm`.
    pub reservation: Option<Reservation>,
}
