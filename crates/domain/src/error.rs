// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date::MovieDate;
use crate::movie_time::MovieTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The year/month/day triple is not a real calendar date.
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component (1-12).
        month: u8,
        /// The day component (1-31).
        day: u8,
    },
    /// The hour/minute pair is not a valid time of day.
    InvalidTime {
        /// The hour component.
        hour: u8,
        /// The minute component.
        minute: u8,
    },
    /// Failed to parse a date or time from a string.
    ParseError {
        /// The input that could not be parsed.
        input: String,
        /// The parser error message.
        error: String,
    },
    /// A seat grid must have at least one row and one column.
    InvalidGrid {
        /// The requested row count.
        rows: u16,
        /// The requested column count.
        columns: u16,
    },
    /// The seat lies outside the seat grid.
    SeatOutOfGrid {
        /// The seat row.
        row: u16,
        /// The seat column.
        column: u16,
        /// The grid row count.
        rows: u16,
        /// The grid column count.
        columns: u16,
    },
    /// Ticket count must be between 1 and the number of seats available.
    InvalidTicketCount {
        /// The requested count.
        count: u16,
        /// The maximum number of tickets allowed.
        max: u16,
    },
    /// All seats allowed by the ticket have already been picked.
    SeatCapacityExceeded {
        /// The ticket count bounding the selection.
        capacity: u16,
    },
    /// Ticket count cannot drop below the number of seats already picked.
    TicketBelowPickedSeats {
        /// The requested ticket count.
        count: u16,
        /// The number of seats currently picked.
        picked: usize,
    },
    /// The reservation date was never selected.
    MissingDate,
    /// The reservation time was never selected.
    MissingTime,
    /// The number of picked seats does not match the ticket count.
    SeatCountMismatch {
        /// The ticket count.
        expected: u16,
        /// The number of picked seats.
        actual: usize,
    },
    /// A reservation's price differs from what the pricing engine computes.
    PriceMismatch {
        /// The price the pricing engine computes.
        expected: u64,
        /// The price carried by the reservation.
        actual: u64,
    },
    /// The date lies outside the movie's screening period.
    DateOutOfRange {
        /// The rejected date.
        date: MovieDate,
        /// First screening date (inclusive).
        start: MovieDate,
        /// Last screening date (inclusive).
        end: MovieDate,
    },
    /// The time is not one of the screening times offered on the date.
    TimeNotScheduled {
        /// The date the time was requested for.
        date: MovieDate,
        /// The rejected time.
        time: MovieTime,
    },
    /// Screening interval must be between 1 minute and one day.
    InvalidScreeningInterval {
        /// The rejected interval in minutes.
        interval_minutes: u16,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "Invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "Invalid time of day: {hour:02}:{minute:02}")
            }
            Self::ParseError { input, error } => {
                write!(f, "Failed to parse '{input}': {error}")
            }
            Self::InvalidGrid { rows, columns } => {
                write!(
                    f,
                    "Invalid seat grid {rows}x{columns}: rows and columns must be at least 1"
                )
            }
            Self::SeatOutOfGrid {
                row,
                column,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Seat (row {row}, column {column}) is outside the {rows}x{columns} grid"
                )
            }
            Self::InvalidTicketCount { count, max } => {
                write!(
                    f,
                    "Invalid ticket count: {count}. Must be between 1 and {max}"
                )
            }
            Self::SeatCapacityExceeded { capacity } => {
                write!(f, "Cannot pick more than {capacity} seat(s)")
            }
            Self::TicketBelowPickedSeats { count, picked } => {
                write!(
                    f,
                    "Ticket count {count} is below the {picked} seat(s) already picked"
                )
            }
            Self::MissingDate => write!(f, "No screening date has been selected"),
            Self::MissingTime => write!(f, "No screening time has been selected"),
            Self::SeatCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Picked {actual} seat(s) but the ticket is for {expected}"
                )
            }
            Self::PriceMismatch { expected, actual } => {
                write!(f, "Reservation price {actual} does not match quoted price {expected}")
            }
            Self::DateOutOfRange { date, start, end } => {
                write!(
                    f,
                    "Date {date} is not bookable: screening period is {start} to {end}"
                )
            }
            Self::TimeNotScheduled { date, time } => {
                write!(f, "No screening at {time} on {date}")
            }
            Self::InvalidScreeningInterval { interval_minutes } => {
                write!(
                    f,
                    "Invalid screening interval: {interval_minutes} minutes. Must be between 1 and 1440"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
