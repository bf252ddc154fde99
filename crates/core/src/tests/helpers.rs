// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingRules, BookingSession, Command, TransitionResult, apply};
use cineseat_domain::{
    DiscountRules, Movie, MovieDate, MovieTime, ScreeningSchedule, SeatGrid, Theater,
};

pub fn date(year: i32, month: u8, day: u8) -> MovieDate {
    MovieDate::new(year, month, day).unwrap()
}

pub fn at(hour: u8, minute: u8) -> MovieTime {
    MovieTime::new(hour, minute).unwrap()
}

/// Monday 2024-01-08.
pub fn create_test_today() -> MovieDate {
    date(2024, 1, 8)
}

pub fn create_test_rules() -> BookingRules {
    BookingRules {
        grid: SeatGrid::new(5, 4).unwrap(),
        base_price_per_seat: 10_000,
        discounts: DiscountRules::standard(),
        schedule: ScreeningSchedule::default(),
    }
}

pub fn create_test_session() -> BookingSession {
    BookingSession::new(
        Movie::new("Harry Potter", date(2024, 1, 5), date(2024, 1, 31), 152),
        Theater::new("Jamsil"),
    )
}

/// Applies commands in order, panicking on the first failure.
pub fn apply_all(session: &BookingSession, commands: &[Command]) -> BookingSession {
    let rules: BookingRules = create_test_rules();
    commands.iter().fold(session.clone(), |state, command| {
        let result: TransitionResult = apply(&rules, &state, *command, create_test_today()).unwrap();
        result.new_state
    })
}
