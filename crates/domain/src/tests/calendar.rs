// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_movie, date};
use crate::{DomainError, MovieDate, release_dates};

#[test]
fn test_release_dates_start_at_today_when_inside_window() {
    let dates: Vec<MovieDate> =
        release_dates(date(2024, 1, 5), date(2024, 1, 10), date(2024, 1, 8));

    assert_eq!(
        dates,
        vec![date(2024, 1, 8), date(2024, 1, 9), date(2024, 1, 10)]
    );
}

#[test]
fn test_release_dates_empty_when_window_closed() {
    let dates: Vec<MovieDate> =
        release_dates(date(2024, 1, 5), date(2024, 1, 10), date(2024, 1, 11));

    assert!(dates.is_empty());
}

#[test]
fn test_release_dates_start_at_from_when_today_is_earlier() {
    let dates: Vec<MovieDate> =
        release_dates(date(2024, 1, 5), date(2024, 1, 7), date(2023, 12, 25));

    assert_eq!(
        dates,
        vec![date(2024, 1, 5), date(2024, 1, 6), date(2024, 1, 7)]
    );
}

#[test]
fn test_release_dates_include_last_day_when_today_is_last_day() {
    let dates: Vec<MovieDate> =
        release_dates(date(2024, 1, 5), date(2024, 1, 10), date(2024, 1, 10));

    assert_eq!(dates, vec![date(2024, 1, 10)]);
}

#[test]
fn test_release_dates_cross_month_and_leap_day() {
    let dates: Vec<MovieDate> =
        release_dates(date(2024, 2, 28), date(2024, 3, 1), date(2024, 2, 1));

    assert_eq!(
        dates,
        vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
    );
}

#[test]
fn test_release_dates_reversed_range_is_not_corrected() {
    // today is clamped against `from` only, so the start lands after `to`
    let dates: Vec<MovieDate> =
        release_dates(date(2024, 1, 10), date(2024, 1, 5), date(2024, 1, 3));

    assert!(dates.is_empty());
}

#[test]
fn test_release_dates_are_restartable() {
    let first: Vec<MovieDate> =
        release_dates(date(2024, 1, 5), date(2024, 1, 10), date(2024, 1, 8));
    let second: Vec<MovieDate> =
        release_dates(date(2024, 1, 5), date(2024, 1, 10), date(2024, 1, 8));

    assert_eq!(first, second);
}

#[test]
fn test_movie_release_dates_use_screening_period() {
    let movie = create_test_movie();

    let dates: Vec<MovieDate> = movie.release_dates(date(2024, 1, 29));

    assert_eq!(
        dates,
        vec![date(2024, 1, 29), date(2024, 1, 30), date(2024, 1, 31)]
    );
}

#[test]
fn test_movie_bookable_date_starts_at_today() {
    let movie = create_test_movie();
    let today: MovieDate = date(2024, 1, 8);

    assert_eq!(movie.check_bookable_date(date(2024, 1, 8), today), Ok(()));
    assert_eq!(movie.check_bookable_date(date(2024, 1, 31), today), Ok(()));
    assert_eq!(
        movie.check_bookable_date(date(2024, 1, 6), today),
        Err(DomainError::DateOutOfRange {
            date: date(2024, 1, 6),
            start: date(2024, 1, 8),
            end: date(2024, 1, 31),
        })
    );
}

#[test]
fn test_movie_bookable_date_before_release_uses_start_date() {
    let movie = create_test_movie();
    let today: MovieDate = date(2023, 12, 25);

    assert_eq!(movie.check_bookable_date(date(2024, 1, 5), today), Ok(()));
    assert!(movie.check_bookable_date(date(2024, 1, 4), today).is_err());
}

#[test]
fn test_movie_date_rejects_invalid_calendar_date() {
    let result: Result<MovieDate, DomainError> = MovieDate::new(2023, 2, 29);
    assert_eq!(
        result,
        Err(DomainError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29
        })
    );

    assert!(MovieDate::new(2024, 13, 1).is_err());
    assert!(MovieDate::new(2024, 0, 1).is_err());
    assert!(MovieDate::new(2024, 4, 31).is_err());
}

#[test]
fn test_movie_date_components() {
    let d: MovieDate = date(2024, 3, 9);
    assert_eq!(d.year(), 2024);
    assert_eq!(d.month(), 3);
    assert_eq!(d.day(), 9);
}

#[test]
fn test_is_weekend() {
    assert!(date(2024, 1, 6).is_weekend()); // Saturday
    assert!(date(2024, 1, 7).is_weekend()); // Sunday
    assert!(!date(2024, 1, 8).is_weekend()); // Monday
    assert!(!date(2024, 1, 12).is_weekend()); // Friday
}

#[test]
fn test_is_discountable_only_on_tenth_twentieth_thirtieth() {
    assert!(date(2024, 1, 10).is_discountable());
    assert!(date(2024, 1, 20).is_discountable());
    assert!(date(2024, 1, 30).is_discountable());
    assert!(!date(2024, 1, 15).is_discountable());
    assert!(!date(2024, 1, 31).is_discountable());
    assert!(!date(2024, 1, 1).is_discountable());
}

#[test]
fn test_is_today_at() {
    let today: MovieDate = date(2024, 1, 8);
    assert!(date(2024, 1, 8).is_today_at(today));
    assert!(!date(2024, 1, 9).is_today_at(today));
}

#[test]
fn test_is_today_matches_current_date() {
    assert!(MovieDate::today().is_today());
}

#[test]
fn test_check_in_range() {
    let start: MovieDate = date(2024, 1, 5);
    let end: MovieDate = date(2024, 1, 10);

    assert!(date(2024, 1, 5).check_in_range(start, end).is_ok());
    assert!(date(2024, 1, 10).check_in_range(start, end).is_ok());
    assert!(matches!(
        date(2024, 1, 11).check_in_range(start, end),
        Err(DomainError::DateOutOfRange { .. })
    ));
    assert!(matches!(
        date(2024, 1, 4).check_in_range(start, end),
        Err(DomainError::DateOutOfRange { .. })
    ));
}

#[test]
fn test_parse_and_display() {
    let d: MovieDate = MovieDate::parse("2024-01-08").unwrap();
    assert_eq!(d, date(2024, 1, 8));
    assert_eq!(d.to_string(), "2024-01-08");
}

#[test]
fn test_parse_rejects_garbage() {
    let result: Result<MovieDate, DomainError> = MovieDate::parse("2024/01/08");
    assert!(matches!(result, Err(DomainError::ParseError { .. })));

    assert!(MovieDate::parse("2024-02-30").is_err());
}

#[test]
fn test_serde_uses_year_month_day_fields() {
    let json: String = serde_json::to_string(&date(2024, 1, 20)).unwrap();
    assert_eq!(json, r#"{"year":2024,"month":1,"day":20}"#);

    let back: MovieDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date(2024, 1, 20));
}

#[test]
fn test_deserialize_rejects_invalid_date() {
    let result: Result<MovieDate, serde_json::Error> =
        serde_json::from_str(r#"{"year":2024,"month":2,"day":30}"#);
    assert!(result.is_err());
}
