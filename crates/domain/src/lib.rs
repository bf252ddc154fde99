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

mod date;
mod discount;
mod error;
mod movie;
mod movie_time;
mod picked_seats;
mod pricing;
mod reservation;
mod screening;
mod seat;
mod ticket;

#[cfg(test)]
mod tests;

pub use date::{MovieDate, release_dates, release_dates_from_today};
pub use discount::{DayDiscount, DiscountPolicy, DiscountRules, TimeDiscount, TimeRange};
pub use error::DomainError;
pub use movie::{Movie, Theater};
pub use movie_time::MovieTime;
pub use picked_seats::PickedSeats;
pub use pricing::{
    AppliedDiscount, PriceBreakdown, TicketPrice, calculate_total_price, price_breakdown,
};
pub use reservation::Reservation;
pub use screening::ScreeningSchedule;
pub use seat::{Seat, SeatGrid};
pub use ticket::Ticket;
