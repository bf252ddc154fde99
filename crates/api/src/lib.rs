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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::{
    ConfigError, Engine, EngineConfig, GridConfig, MAX_REMINDER_LEAD_MINUTES, PricingConfig,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    apply_session_command, create_reservation, list_release_dates, list_screening_times,
    quote_price, reservation_info, seat_map, start_session,
};
pub use request_response::{
    ApplySessionRequest, ApplySessionResponse, CreateReservationRequest,
    CreateReservationResponse, DiscountInfo, MovieRequest, QuoteRequest, QuoteResponse,
    ReleaseDatesRequest, ReleaseDatesResponse, ReservationInfo, ScreeningTimesRequest,
    ScreeningTimesResponse, SeatInfo, SeatMapRequest, SeatMapResponse, SessionCommandRequest,
    StartSessionRequest, StartSessionResponse,
};
