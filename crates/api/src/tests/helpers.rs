// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use cineseat_domain::Seat;

use crate::{CreateReservationRequest, Engine, EngineConfig, MovieRequest};

/// Monday 2024-01-08.
pub const TEST_TODAY: &str = "2024-01-08";

pub fn create_test_engine() -> Engine {
    EngineConfig::default()
        .build()
        .expect("Default configuration is valid")
}

pub fn create_test_movie_request() -> MovieRequest {
    MovieRequest {
        title: String::from("Harry Potter"),
        start_date: String::from("2024-01-05"),
        end_date: String::from("2024-01-31"),
        running_time_minutes: 152,
    }
}

/// Two seats on Wednesday the 10th at 10:00.
pub fn create_valid_reservation_request() -> CreateReservationRequest {
    CreateReservationRequest {
        movie: create_test_movie_request(),
        theater: String::from("Jamsil"),
        date: String::from("2024-01-10"),
        time: String::from("10:00"),
        ticket_count: 2,
        seats: vec![Seat::new(0, 0), Seat::new(0, 1)],
        today: Some(String::from(TEST_TODAY)),
    }
}
