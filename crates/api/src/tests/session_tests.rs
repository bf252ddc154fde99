// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cineseat::BookingSession;
use cineseat_domain::{MovieDate, MovieTime, Seat, Ticket};
use serde_json::Value;

use crate::tests::helpers::{TEST_TODAY, create_test_engine, create_test_movie_request};
use crate::{
    ApiError, ApplySessionRequest, ApplySessionResponse, Engine, SessionCommandRequest,
    StartSessionRequest, StartSessionResponse, apply_session_command, start_session,
};

fn start() -> StartSessionResponse {
    start_session(&StartSessionRequest {
        movie: create_test_movie_request(),
        theater: String::from("Jamsil"),
        today: Some(String::from(TEST_TODAY)),
    })
    .unwrap()
}

fn send(
    engine: &Engine,
    session: BookingSession,
    command: SessionCommandRequest,
) -> Result<ApplySessionResponse, ApiError> {
    apply_session_command(
        engine,
        &ApplySessionRequest {
            session,
            command,
            today: Some(String::from(TEST_TODAY)),
        },
    )
}

#[test]
fn test_start_session_lists_dates_from_today() {
    let response: StartSessionResponse = start();

    assert_eq!(response.session.ticket.count(), 1);
    assert!(response.session.picked.is_empty());
    assert_eq!(
        response.available_dates.first().map(String::as_str),
        Some("2024-01-08")
    );
    assert_eq!(
        response.available_dates.last().map(String::as_str),
        Some("2024-01-31")
    );
}

#[test]
fn test_full_booking_flow() {
    let engine: Engine = create_test_engine();
    let commands: Vec<SessionCommandRequest> = vec![
        SessionCommandRequest::SelectDate {
            date: String::from("2024-01-10"),
        },
        SessionCommandRequest::SelectTime {
            time: String::from("10:00"),
        },
        SessionCommandRequest::IncreaseTicket,
        SessionCommandRequest::PickSeat { row: 0, column: 0 },
        SessionCommandRequest::ToggleSeat { row: 0, column: 1 },
    ];

    let mut session: BookingSession = start().session;
    let mut last: Option<ApplySessionResponse> = None;
    for command in commands {
        // The session travels through the client as JSON between commands
        let saved: String = serde_json::to_string(&session).unwrap();
        let restored: BookingSession = serde_json::from_str(&saved).unwrap();
        let response: ApplySessionResponse = send(&engine, restored, command).unwrap();
        session = response.session.clone();
        last = Some(response);
    }

    let last: ApplySessionResponse = last.unwrap();
    assert!(last.ready_to_confirm);
    assert_eq!(last.total, 12_000);

    let confirmed: ApplySessionResponse =
        send(&engine, session, SessionCommandRequest::Confirm).unwrap();

    assert_eq!(confirmed.action, "Confirm");
    let reservation = confirmed.reservation.unwrap();
    assert_eq!(reservation.seats, vec!["A1", "A2"]);
    assert_eq!(reservation.total, 12_000);
    assert_eq!(reservation.reminder_at, "2024-01-10 09:30");
}

#[test]
fn test_command_rule_violation_is_reported() {
    let engine: Engine = create_test_engine();

    let result: Result<ApplySessionResponse, ApiError> = send(
        &engine,
        start().session,
        SessionCommandRequest::SelectTime {
            time: String::from("10:00"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "date_selected"
    ));
}

#[test]
fn test_command_with_malformed_date_is_invalid_input() {
    let engine: Engine = create_test_engine();

    let result: Result<ApplySessionResponse, ApiError> = send(
        &engine,
        start().session,
        SessionCommandRequest::SelectDate {
            date: String::from("2024-1-10"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[test]
fn test_command_json_shape() {
    let command: SessionCommandRequest =
        serde_json::from_str(r#"{ "type": "pick_seat", "row": 2, "column": 3 }"#).unwrap();

    assert_eq!(command, SessionCommandRequest::PickSeat { row: 2, column: 3 });

    let confirm: SessionCommandRequest = serde_json::from_str(r#"{ "type": "confirm" }"#).unwrap();
    assert_eq!(confirm, SessionCommandRequest::Confirm);
}

fn assert_rule(result: Result<ApplySessionResponse, ApiError>, expected: &str) {
    assert!(
        matches!(result, Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == expected),
        "expected rule {expected}"
    );
}

/// A session that no sequence of commands could have produced.
fn create_forged_session() -> BookingSession {
    let mut session: BookingSession = start().session;
    session.ticket = Ticket::new(2, u16::MAX).unwrap();
    session.date = Some(MovieDate::new(2023, 12, 1).unwrap());
    session.time = Some(MovieTime::new(3, 17).unwrap());
    session.picked = session.picked.add(Seat::new(99, 99)).add(Seat::new(0, 0));
    session
}

#[test]
fn test_forged_session_cannot_confirm() {
    let engine: Engine = create_test_engine();

    let result: Result<ApplySessionResponse, ApiError> =
        send(&engine, create_forged_session(), SessionCommandRequest::Confirm);

    assert_rule(result, "seat_in_grid");
}

#[test]
fn test_forged_session_date_is_rejected() {
    let engine: Engine = create_test_engine();
    let mut session: BookingSession = create_forged_session();
    session.picked = session.picked.remove(Seat::new(99, 99)).add(Seat::new(0, 1));

    let result: Result<ApplySessionResponse, ApiError> =
        send(&engine, session, SessionCommandRequest::Confirm);

    assert_rule(result, "date_in_window");
}

#[test]
fn test_forged_session_time_is_rejected() {
    let engine: Engine = create_test_engine();
    let mut session: BookingSession = create_forged_session();
    session.picked = session.picked.remove(Seat::new(99, 99)).add(Seat::new(0, 1));
    session.date = Some(MovieDate::new(2024, 1, 10).unwrap());

    let result: Result<ApplySessionResponse, ApiError> =
        send(&engine, session, SessionCommandRequest::Confirm);

    assert_rule(result, "time_scheduled");
}

#[test]
fn test_forged_session_json_with_extra_seats_is_rejected() {
    let engine: Engine = create_test_engine();
    let mut value: Value = serde_json::to_value(start().session).unwrap();
    // One ticket, three seats
    let seats: Value = serde_json::to_value(
        start()
            .session
            .picked
            .add(Seat::new(0, 0))
            .add(Seat::new(0, 1))
            .add(Seat::new(0, 2)),
    )
    .unwrap();
    value["picked"] = seats;
    let session: BookingSession = serde_json::from_value(value).unwrap();

    let result: Result<ApplySessionResponse, ApiError> = send(
        &engine,
        session,
        SessionCommandRequest::UnpickSeat { row: 0, column: 2 },
    );

    assert_rule(result, "ticket_covers_picked_seats");
}
