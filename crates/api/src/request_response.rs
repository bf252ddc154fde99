// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and times as `HH:MM` strings. Booking
//! sessions travel in their domain form so a client can save and restore one.

use cineseat::BookingSession;
use cineseat_domain::Seat;
use serde::{Deserialize, Serialize};

/// API request to list the bookable dates of a screening period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDatesRequest {
    /// First screening date (inclusive).
    pub from: String,
    /// Last screening date (inclusive).
    pub to: String,
    /// Reference date; defaults to the current date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

/// API response listing bookable dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDatesResponse {
    /// The dates in ascending order.
    pub dates: Vec<String>,
}

/// API request to list the screening times of a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningTimesRequest {
    /// The screening date.
    pub date: String,
}

/// API response listing screening times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningTimesResponse {
    /// The screening date.
    pub date: String,
    /// The screening times in ascending order.
    pub times: Vec<String>,
}

/// API request to render the seat grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMapRequest {
    /// The seats picked so far.
    #[serde(default)]
    pub picked: Vec<Seat>,
}

/// One seat of the seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    /// Zero-based row.
    pub row: u16,
    /// Zero-based column.
    pub column: u16,
    /// Display label, e.g. `A1`.
    pub label: String,
    /// Whether the seat is picked.
    pub picked: bool,
}

/// API response describing the seat grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMapResponse {
    /// Number of rows.
    pub rows: u16,
    /// Seats per row.
    pub columns: u16,
    /// Every seat in row-major order.
    pub seats: Vec<SeatInfo>,
}

/// API request to price a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The screening date.
    pub date: String,
    /// The screening time, if one has been chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// The picked seats.
    pub seats: Vec<Seat>,
}

/// One discount's contribution to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountInfo {
    /// The policy name (`day`, `time`).
    pub policy: String,
    /// Whether the policy qualified.
    pub qualified: bool,
    /// Amount subtracted per seat.
    pub discount_per_seat: u64,
}

/// API response for a price quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Price of one seat before discounts.
    pub base_price_per_seat: u64,
    /// Price of one seat after discounts.
    pub price_per_seat: u64,
    /// Number of distinct seats priced.
    pub seat_count: usize,
    /// Total price.
    pub total: u64,
    /// Every policy that was evaluated.
    pub discounts: Vec<DiscountInfo>,
}

/// A movie as supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRequest {
    /// The movie title.
    pub title: String,
    /// First screening date (inclusive).
    pub start_date: String,
    /// Last screening date (inclusive).
    pub end_date: String,
    /// Running time in minutes.
    #[serde(default)]
    pub running_time_minutes: u16,
}

/// API request to start a booking session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionRequest {
    /// The movie to book.
    pub movie: MovieRequest,
    /// The theater name.
    pub theater: String,
    /// Reference date; defaults to the current date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

/// API response for a new booking session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    /// The fresh session.
    pub session: BookingSession,
    /// Dates the session may select.
    pub available_dates: Vec<String>,
}

/// A session command as supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionCommandRequest {
    /// Select a screening date.
    SelectDate {
        /// The date.
        date: String,
    },
    /// Select a screening time.
    SelectTime {
        /// The time.
        time: String,
    },
    /// Add one ticket.
    IncreaseTicket,
    /// Remove one ticket.
    DecreaseTicket,
    /// Pick a seat.
    PickSeat {
        /// Zero-based row.
        row: u16,
        /// Zero-based column.
        column: u16,
    },
    /// Release a seat.
    UnpickSeat {
        /// Zero-based row.
        row: u16,
        /// Zero-based column.
        column: u16,
    },
    /// Pick a free seat or release a picked one.
    ToggleSeat {
        /// Zero-based row.
        row: u16,
        /// Zero-based column.
        column: u16,
    },
    /// Confirm the booking.
    Confirm,
}

/// API request to apply a command to a saved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplySessionRequest {
    /// The session as last returned by the server.
    pub session: BookingSession,
    /// The command.
    pub command: SessionCommandRequest,
    /// Reference date; defaults to the current date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

/// API response for a session transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplySessionResponse {
    /// The session after the command.
    pub session: BookingSession,
    /// The command name.
    pub action: String,
    /// What the command did.
    pub details: Option<String>,
    /// Total price of the selection.
    pub total: u64,
    /// Whether `confirm` would succeed.
    pub ready_to_confirm: bool,
    /// The reservation, present only after `confirm`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation: Option<ReservationInfo>,
}

/// API request to create a reservation in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// The movie.
    pub movie: MovieRequest,
    /// The theater name.
    #[serde(default)]
    pub theater: String,
    /// The screening date.
    pub date: String,
    /// The screening time.
    pub time: String,
    /// Number of tickets.
    pub ticket_count: u16,
    /// The picked seats.
    pub seats: Vec<Seat>,
    /// Reference date; defaults to the current date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<String>,
}

/// A confirmed reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationInfo {
    /// The movie title.
    pub movie_title: String,
    /// The theater name.
    pub theater: String,
    /// The screening date.
    pub date: String,
    /// The screening time.
    pub time: String,
    /// Number of tickets.
    pub ticket_count: u16,
    /// Seat labels in row-major order.
    pub seats: Vec<String>,
    /// Total price.
    pub total: u64,
    /// When the reminder fires, `YYYY-MM-DD HH:MM`.
    pub reminder_at: String,
}

/// API response for a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationResponse {
    /// The reservation.
    pub reservation: ReservationInfo,
    /// A success message.
    pub message: String,
}
