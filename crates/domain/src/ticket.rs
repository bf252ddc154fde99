// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The number of seats a user intends to reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TicketParts", into = "TicketParts")]
pub struct Ticket {
    count: u16,
}

#[derive(Serialize, Deserialize)]
struct TicketParts {
    count: u16,
}

impl TryFrom<TicketParts> for Ticket {
    type Error = DomainError;

    fn try_from(parts: TicketParts) -> Result<Self, Self::Error> {
        Self::new(parts.count, u16::MAX)
    }
}

impl From<Ticket> for TicketParts {
    fn from(ticket: Ticket) -> Self {
        Self {
            count: ticket.count,
        }
    }
}

impl Default for Ticket {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl Ticket {
    /// Creates a ticket for `count` seats.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of seats
    /// * `max` - Upper bound, normally the seat grid capacity
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketCount` unless `1 <= count <= max`.
    pub const fn new(count: u16, max: u16) -> Result<Self, DomainError> {
        if count == 0 || count > max {
            return Err(DomainError::InvalidTicketCount { count, max });
        }
        Ok(Self { count })
    }

    #[must_use]
    pub const fn count(&self) -> u16 {
        self.count
    }

    /// One more seat, saturating at `max`.
    #[must_use]
    pub const fn increased(self, max: u16) -> Self {
        if self.count >= max {
            return self;
        }
        Self {
            count: self.count + 1,
        }
    }

    /// One fewer seat, saturating at 1.
    #[must_use]
    pub const fn decreased(self) -> Self {
        if self.count <= 1 {
            return self;
        }
        Self {
            count: self.count - 1,
        }
    }
}
