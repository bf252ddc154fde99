// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Movie, MovieDate, MovieTime, PickedSeats, Seat, Theater};

pub fn date(year: i32, month: u8, day: u8) -> MovieDate {
    MovieDate::new(year, month, day).unwrap()
}

pub fn at(hour: u8, minute: u8) -> MovieTime {
    MovieTime::new(hour, minute).unwrap()
}

pub fn create_test_movie() -> Movie {
    Movie::new("Harry Potter", date(2024, 1, 5), date(2024, 1, 31), 152)
}

pub fn create_test_theater() -> Theater {
    Theater::new("Jamsil")
}

pub fn picked(seats: &[(u16, u16)]) -> PickedSeats {
    seats
        .iter()
        .map(|(row, column)| Seat::new(*row, *column))
        .collect()
}
