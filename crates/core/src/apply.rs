// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{BookingRules, BookingSession, SessionEvent, TransitionResult};
use cineseat_domain::{
    DomainError, MovieDate, MovieTime, PriceBreakdown, Reservation, Seat, Ticket,
};
use tracing::debug;

/// Applies a command to a booking session, producing a new session and event.
///
/// The incoming session is checked against `rules` and `today` before the
/// command runs, see [`BookingSession::check`].
///
/// # Arguments
///
/// * `rules` - The booking rules (grid, pricing, schedule)
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `today` - The reference date for the calendar window
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session, event, and price
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The incoming session breaks a booking rule
/// - The date is outside the bookable window
/// - The time is selected before a date, or is not offered on the date
/// - The ticket count would drop below the number of picked seats
/// - The seat is outside the grid, or every allowed seat is already picked
/// - Confirmation is attempted without a date, a time, or the right number of seats
pub fn apply(
    rules: &BookingRules,
    session: &BookingSession,
    command: Command,
    today: MovieDate,
) -> Result<TransitionResult, CoreError> {
    session.check(rules, today)?;

    let (new_state, details): (BookingSession, String) = match command {
        Command::SelectDate { date } => select_date(rules, session, date, today)?,
        Command::SelectTime { time } => select_time(rules, session, time)?,
        Command::IncreaseTicket => {
            let ticket: Ticket = session.ticket.increased(rules.grid.capacity());
            let mut new_state: BookingSession = session.clone();
            new_state.ticket = ticket;
            (new_state, format!("Ticket count is {}", ticket.count()))
        }
        Command::DecreaseTicket => decrease_ticket(session)?,
        Command::PickSeat { seat } => pick_seat(rules, session, seat)?,
        Command::UnpickSeat { seat } => unpick_seat(session, seat),
        Command::ToggleSeat { seat } => {
            if session.picked.is_picked(seat) {
                unpick_seat(session, seat)
            } else {
                pick_seat(rules, session, seat)?
            }
        }
        Command::Confirm => {
            let reservation: Reservation = confirm(rules, session)?;
            let details: String = format!(
                "Reserved {} for {} at {} on {}, total {}",
                reservation.seats().labels().join(", "),
                reservation.movie().title,
                reservation.time(),
                reservation.date(),
                reservation.price()
            );
            return Ok(TransitionResult {
                new_state: session.clone(),
                event: SessionEvent::new(command.name(), Some(details)),
                price: reservation.price(),
                reservation: Some(reservation),
            });
        }
    };

    let quote: PriceBreakdown = new_state.quote(rules);
    for applied in &quote.discounts {
        debug!(
            policy = %applied.policy,
            qualified = applied.qualified,
            discount_per_seat = applied.discount_per_seat,
            "Evaluated discount policy"
        );
    }
    debug!(
        action = command.name(),
        seats = quote.seat_count,
        total = quote.total.amount(),
        "Applied session command"
    );

    Ok(TransitionResult {
        new_state,
        event: SessionEvent::new(command.name(), Some(details)),
        price: quote.total,
        reservation: None,
    })
}

/// Selects a date in the calendar window, dropping a selected time that is not
/// offered on it.
fn select_date(
    rules: &BookingRules,
    session: &BookingSession,
    date: MovieDate,
    today: MovieDate,
) -> Result<(BookingSession, String), CoreError> {
    session.movie.check_bookable_date(date, today)?;

    let mut new_state: BookingSession = session.clone();
    new_state.date = Some(date);

    let dropped_time: Option<MovieTime> = session
        .time
        .filter(|time| !rules.schedule.times_for(date).contains(time));

    let details: String = match dropped_time {
        Some(time) => {
            new_state.time = None;
            format!("Selected date {date}, cleared time {time}")
        }
        None => format!("Selected date {date}"),
    };

    Ok((new_state, details))
}

fn select_time(
    rules: &BookingRules,
    session: &BookingSession,
    time: MovieTime,
) -> Result<(BookingSession, String), CoreError> {
    let date: MovieDate = session.date.ok_or(DomainError::MissingDate)?;
    rules.schedule.check_scheduled(date, time)?;

    let mut new_state: BookingSession = session.clone();
    new_state.time = Some(time);
    Ok((new_state, format!("Selected time {time}")))
}

fn decrease_ticket(session: &BookingSession) -> Result<(BookingSession, String), CoreError> {
    let ticket: Ticket = session.ticket.decreased();

    if session.picked.len() > usize::from(ticket.count()) {
        return Err(CoreError::DomainViolation(
            DomainError::TicketBelowPickedSeats {
                count: ticket.count(),
                picked: session.picked.len(),
            },
        ));
    }

    let mut new_state: BookingSession = session.clone();
    new_state.ticket = ticket;
    Ok((new_state, format!("Ticket count is {}", ticket.count())))
}

fn pick_seat(
    rules: &BookingRules,
    session: &BookingSession,
    seat: Seat,
) -> Result<(BookingSession, String), CoreError> {
    rules.grid.check_contains(seat)?;

    if session.picked.is_picked(seat) {
        return Ok((session.clone(), format!("Seat {seat} already picked")));
    }

    if !session.picked.can_pick(session.ticket) {
        return Err(CoreError::DomainViolation(
            DomainError::SeatCapacityExceeded {
                capacity: session.ticket.count(),
            },
        ));
    }

    let mut new_state: BookingSession = session.clone();
    new_state.picked = session.picked.add(seat);
    Ok((new_state, format!("Picked seat {seat}")))
}

fn unpick_seat(session: &BookingSession, seat: Seat) -> (BookingSession, String) {
    let mut new_state: BookingSession = session.clone();
    new_state.picked = session.picked.remove(seat);
    (new_state, format!("Released seat {seat}"))
}

fn confirm(rules: &BookingRules, session: &BookingSession) -> Result<Reservation, CoreError> {
    let quote: PriceBreakdown = session.quote(rules);
    let reservation: Reservation = session.movie.reserve(
        session.theater.clone(),
        session.date,
        session.time,
        session.ticket,
        session.picked.clone(),
        quote.total,
    )?;
    Ok(reservation)
}
