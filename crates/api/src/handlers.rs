// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Handlers are synchronous and stateless: the engine is shared read-only and
//! sessions travel in the requests.

use cineseat::{BookingSession, Command, TransitionResult, apply, available_dates};
use cineseat_domain::{
    DiscountPolicy, Movie, MovieDate, MovieTime, PickedSeats, PriceBreakdown, Reservation, Seat,
    SeatGrid, Theater, Ticket, TicketPrice, calculate_total_price, price_breakdown,
    release_dates,
};
use time::PrimitiveDateTime;
use time::macros::format_description;
use tracing::debug;

use crate::config::Engine;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ApplySessionRequest, ApplySessionResponse, CreateReservationRequest,
    CreateReservationResponse, DiscountInfo, MovieRequest, QuoteRequest, QuoteResponse,
    ReleaseDatesRequest, ReleaseDatesResponse, ReservationInfo, ScreeningTimesRequest,
    ScreeningTimesResponse, SeatInfo, SeatMapRequest, SeatMapResponse, SessionCommandRequest,
    StartSessionRequest, StartSessionResponse,
};

/// Parses a `YYYY-MM-DD` field, naming the field on failure.
fn parse_date(field: &str, value: &str) -> Result<MovieDate, ApiError> {
    MovieDate::parse(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

/// Parses an `HH:MM` field, naming the field on failure.
fn parse_time(field: &str, value: &str) -> Result<MovieTime, ApiError> {
    MovieTime::parse(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

/// Resolves an optional reference date, falling back to the current date.
fn resolve_today(today: Option<&str>) -> Result<MovieDate, ApiError> {
    today.map_or_else(|| Ok(MovieDate::today()), |value| parse_date("today", value))
}

fn parse_movie(request: &MovieRequest) -> Result<Movie, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("title"),
            message: String::from("Movie title must not be empty"),
        });
    }

    let start_date: MovieDate = parse_date("start_date", &request.start_date)?;
    let end_date: MovieDate = parse_date("end_date", &request.end_date)?;

    Ok(Movie::new(
        &request.title,
        start_date,
        end_date,
        request.running_time_minutes,
    ))
}

/// Collects requested seats into a picked set, checking each lies in the grid.
///
/// Duplicate seats collapse into one.
fn collect_seats(engine: &Engine, seats: &[Seat]) -> Result<PickedSeats, ApiError> {
    for seat in seats {
        engine
            .rules
            .grid
            .check_contains(*seat)
            .map_err(translate_domain_error)?;
    }
    Ok(seats.iter().copied().collect())
}

fn to_command(request: &SessionCommandRequest) -> Result<Command, ApiError> {
    let command: Command = match request {
        SessionCommandRequest::SelectDate { date } => Command::SelectDate {
            date: parse_date("date", date)?,
        },
        SessionCommandRequest::SelectTime { time } => Command::SelectTime {
            time: parse_time("time", time)?,
        },
        SessionCommandRequest::IncreaseTicket => Command::IncreaseTicket,
        SessionCommandRequest::DecreaseTicket => Command::DecreaseTicket,
        SessionCommandRequest::PickSeat { row, column } => Command::PickSeat {
            seat: Seat::new(*row, *column),
        },
        SessionCommandRequest::UnpickSeat { row, column } => Command::UnpickSeat {
            seat: Seat::new(*row, *column),
        },
        SessionCommandRequest::ToggleSeat { row, column } => Command::ToggleSeat {
            seat: Seat::new(*row, *column),
        },
        SessionCommandRequest::Confirm => Command::Confirm,
    };
    Ok(command)
}

/// Builds the client view of a reservation, including its reminder time.
///
/// # Errors
///
/// Returns an error if the reminder time cannot be computed.
pub fn reservation_info(
    reservation: &Reservation,
    reminder_lead_minutes: u16,
) -> Result<ReservationInfo, ApiError> {
    let reminder: PrimitiveDateTime = reservation
        .reminder_at(reminder_lead_minutes)
        .map_err(translate_domain_error)?;
    let reminder_at: String = reminder
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .map_err(|e| ApiError::InvalidInput {
            field: String::from("reminder_at"),
            message: format!("Failed to format reminder time: {e}"),
        })?;

    Ok(ReservationInfo {
        movie_title: reservation.movie().title.clone(),
        theater: reservation.theater().name.clone(),
        date: reservation.date().to_string(),
        time: reservation.time().to_string(),
        ticket_count: reservation.ticket().count(),
        seats: reservation.seats().labels(),
        total: reservation.price().amount(),
        reminder_at,
    })
}

/// Lists the dates between `from` and `to` that can still be booked.
///
/// # Errors
///
/// Returns an error if a date does not parse.
pub fn list_release_dates(request: &ReleaseDatesRequest) -> Result<ReleaseDatesResponse, ApiError> {
    let from: MovieDate = parse_date("from", &request.from)?;
    let to: MovieDate = parse_date("to", &request.to)?;
    let today: MovieDate = resolve_today(request.today.as_deref())?;

    let dates: Vec<String> = release_dates(from, to, today)
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(ReleaseDatesResponse { dates })
}

/// Lists the screening times offered on a date.
///
/// # Errors
///
/// Returns an error if the date does not parse.
pub fn list_screening_times(
    engine: &Engine,
    request: &ScreeningTimesRequest,
) -> Result<ScreeningTimesResponse, ApiError> {
    let date: MovieDate = parse_date("date", &request.date)?;

    let times: Vec<String> = engine
        .rules
        .schedule
        .times_for(date)
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(ScreeningTimesResponse {
        date: date.to_string(),
        times,
    })
}

/// Describes every seat of the grid and whether it is picked.
///
/// # Errors
///
/// Returns an error if a picked seat lies outside the grid.
pub fn seat_map(engine: &Engine, request: &SeatMapRequest) -> Result<SeatMapResponse, ApiError> {
    let picked: PickedSeats = collect_seats(engine, &request.picked)?;
    let grid: SeatGrid = engine.rules.grid;

    let seats: Vec<SeatInfo> = grid
        .enumerate()
        .map(|seat| SeatInfo {
            row: seat.row,
            column: seat.column,
            label: seat.label(),
            picked: picked.is_picked(seat),
        })
        .collect();

    Ok(SeatMapResponse {
        rows: grid.rows(),
        columns: grid.columns(),
        seats,
    })
}

/// Prices a set of seats for a date and an optional time.
///
/// # Errors
///
/// Returns an error if the date or time does not parse, or a seat lies
/// outside the grid.
pub fn quote_price(engine: &Engine, request: &QuoteRequest) -> Result<QuoteResponse, ApiError> {
    let date: MovieDate = parse_date("date", &request.date)?;
    let time: Option<MovieTime> = request
        .time
        .as_deref()
        .map(|value| parse_time("time", value))
        .transpose()?;
    let picked: PickedSeats = collect_seats(engine, &request.seats)?;

    let policies: Vec<DiscountPolicy> = engine.rules.discounts.policies_for(Some(date), time);
    let breakdown: PriceBreakdown =
        price_breakdown(&picked, engine.rules.base_price_per_seat, &policies);

    debug!(
        date = %date,
        seats = breakdown.seat_count,
        total = breakdown.total.amount(),
        "Quoted price"
    );

    Ok(QuoteResponse {
        base_price_per_seat: breakdown.base_price_per_seat,
        price_per_seat: breakdown.price_per_seat,
        seat_count: breakdown.seat_count,
        total: breakdown.total.amount(),
        discounts: breakdown
            .discounts
            .into_iter()
            .map(|applied| DiscountInfo {
                policy: applied.policy,
                qualified: applied.qualified,
                discount_per_seat: applied.discount_per_seat,
            })
            .collect(),
    })
}

/// Starts a booking session with one ticket and nothing selected.
///
/// # Errors
///
/// Returns an error if the movie is malformed or a date does not parse.
pub fn start_session(request: &StartSessionRequest) -> Result<StartSessionResponse, ApiError> {
    let movie: Movie = parse_movie(&request.movie)?;
    let today: MovieDate = resolve_today(request.today.as_deref())?;

    let session: BookingSession = BookingSession::new(movie, Theater::new(&request.theater));
    let available: Vec<String> = available_dates(&session, today)
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(StartSessionResponse {
        session,
        available_dates: available,
    })
}

/// Applies one command to a saved session.
///
/// # Errors
///
/// Returns an error if the command does not parse or breaks a booking rule.
pub fn apply_session_command(
    engine: &Engine,
    request: &ApplySessionRequest,
) -> Result<ApplySessionResponse, ApiError> {
    let command: Command = to_command(&request.command)?;
    let today: MovieDate = resolve_today(request.today.as_deref())?;

    let result: TransitionResult =
        apply(&engine.rules, &request.session, command, today).map_err(translate_core_error)?;

    let reservation: Option<ReservationInfo> = result
        .reservation
        .as_ref()
        .map(|reservation| reservation_info(reservation, engine.reminder_lead_minutes))
        .transpose()?;

    Ok(ApplySessionResponse {
        ready_to_confirm: result.new_state.is_ready_to_confirm(),
        session: result.new_state,
        action: result.event.action,
        details: result.event.details,
        total: result.price.amount(),
        reservation,
    })
}

/// Creates a reservation from a complete selection in one step.
///
/// # Errors
///
/// Returns an error if an input does not parse, the date is outside the
/// calendar window as of `today`, the time is not offered, the ticket count
/// is out of range, a seat lies outside the grid, or the seat count differs
/// from the ticket count.
pub fn create_reservation(
    engine: &Engine,
    request: &CreateReservationRequest,
) -> Result<CreateReservationResponse, ApiError> {
    let movie: Movie = parse_movie(&request.movie)?;
    let date: MovieDate = parse_date("date", &request.date)?;
    let time: MovieTime = parse_time("time", &request.time)?;
    let today: MovieDate = resolve_today(request.today.as_deref())?;

    movie
        .check_bookable_date(date, today)
        .map_err(translate_domain_error)?;
    engine
        .rules
        .schedule
        .check_scheduled(date, time)
        .map_err(translate_domain_error)?;

    let ticket: Ticket = Ticket::new(request.ticket_count, engine.rules.grid.capacity())
        .map_err(translate_domain_error)?;
    let picked: PickedSeats = collect_seats(engine, &request.seats)?;

    let policies: Vec<DiscountPolicy> = engine.rules.discounts.policies_for(Some(date), Some(time));
    let price: TicketPrice =
        calculate_total_price(&picked, engine.rules.base_price_per_seat, &policies);

    let reservation: Reservation = movie
        .reserve(
            Theater::new(&request.theater),
            Some(date),
            Some(time),
            ticket,
            picked,
            price,
        )
        .map_err(translate_domain_error)?;

    let info: ReservationInfo = reservation_info(&reservation, engine.reminder_lead_minutes)?;
    let message: String = format!(
        "Reserved {} seat(s) for {} at {} on {}",
        info.ticket_count, info.movie_title, info.time, info.date
    );

    Ok(CreateReservationResponse {
        reservation: info,
        message,
    })
}
