// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The set of seats a user has picked for one reservation.
//!
//! ## Invariants
//!
//! - No seat appears twice
//! - The set is a value: `add` and `remove` return a new set and leave `self` untouched
//!
//! The capacity bound (ticket count) is not enforced by `add`. Callers check
//! `can_pick` first; the booking session does this and reports
//! `SeatCapacityExceeded` instead of adding.

use crate::seat::Seat;
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An immutable, ordered set of picked seats.
///
/// Serialises as an ascending list of seats, so an in-progress selection
/// can be saved and restored as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickedSeats {
    seats: BTreeSet<Seat>,
}

impl PickedSeats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seats: BTreeSet::new(),
        }
    }

    /// Returns whether another seat may be picked under `ticket`.
    #[must_use]
    pub fn can_pick(&self, ticket: Ticket) -> bool {
        self.len() < usize::from(ticket.count())
    }

    /// Returns a set that also contains `seat`.
    ///
    /// Adding a seat that is already picked returns an equal set.
    #[must_use]
    pub fn add(&self, seat: Seat) -> Self {
        if self.is_picked(seat) {
            return self.clone();
        }
        let mut seats: BTreeSet<Seat> = self.seats.clone();
        seats.insert(seat);
        Self { seats }
    }

    /// Returns a set without `seat`.
    #[must_use]
    pub fn remove(&self, seat: Seat) -> Self {
        if !self.is_picked(seat) {
            return self.clone();
        }
        let mut seats: BTreeSet<Seat> = self.seats.clone();
        seats.remove(&seat);
        Self { seats }
    }

    #[must_use]
    pub fn is_picked(&self, seat: Seat) -> bool {
        self.seats.contains(&seat)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Picked seats in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Seat> + '_ {
        self.seats.iter().copied()
    }

    /// Labels of the picked seats in row-major order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.iter().map(|seat| seat.label()).collect()
    }
}

impl FromIterator<Seat> for PickedSeats {
    fn from_iter<I: IntoIterator<Item = Seat>>(iter: I) -> Self {
        Self {
            seats: iter.into_iter().collect(),
        }
    }
}
