// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cineseat_domain::{MovieDate, MovieTime, Seat};

/// A command represents user intent as data only.
///
/// Commands are the only way to change a booking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the screening date.
    SelectDate {
        /// The chosen date.
        date: MovieDate,
    },
    /// Select the screening time on the selected date.
    SelectTime {
        /// The chosen start time.
        time: MovieTime,
    },
    /// Add one ticket.
    IncreaseTicket,
    /// Remove one ticket.
    DecreaseTicket,
    /// Pick a seat.
    PickSeat {
        /// The seat to pick.
        seat: Seat,
    },
    /// Release a picked seat.
    UnpickSeat {
        /// The seat to release.
        seat: Seat,
    },
    /// Pick the seat if free, release it if picked.
    ToggleSeat {
        /// The seat to toggle.
        seat: Seat,
    },
    /// Confirm the booking and build the reservation.
    Confirm,
}

impl Command {
    /// The command name recorded on session events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectDate { .. } => "SelectDate",
            Self::SelectTime { .. } => "SelectTime",
            Self::IncreaseTicket => "IncreaseTicket",
            Self::DecreaseTicket => "DecreaseTicket",
            Self::PickSeat { .. } => "PickSeat",
            Self::UnpickSeat { .. } => "UnpickSeat",
            Self::ToggleSeat { .. } => "ToggleSeat",
            Self::Confirm => "Confirm",
        }
    }
}
