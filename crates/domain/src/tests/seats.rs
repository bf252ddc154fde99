// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::picked;
use crate::{DomainError, PickedSeats, Seat, SeatGrid, Ticket};

#[test]
fn test_grid_enumerates_row_major() {
    let grid: SeatGrid = SeatGrid::new(2, 3).unwrap();

    let seats: Vec<Seat> = grid.enumerate().collect();

    assert_eq!(
        seats,
        vec![
            Seat::new(0, 0),
            Seat::new(0, 1),
            Seat::new(0, 2),
            Seat::new(1, 0),
            Seat::new(1, 1),
            Seat::new(1, 2),
        ]
    );
}

#[test]
fn test_reference_grid_has_twenty_seats() {
    let grid: SeatGrid = SeatGrid::new(5, 4).unwrap();
    assert_eq!(grid.enumerate().count(), 20);
    assert_eq!(grid.capacity(), 20);
}

#[test]
fn test_grid_rejects_empty_dimensions() {
    assert_eq!(
        SeatGrid::new(0, 4),
        Err(DomainError::InvalidGrid {
            rows: 0,
            columns: 4
        })
    );
    assert!(SeatGrid::new(5, 0).is_err());
}

#[test]
fn test_grid_contains() {
    let grid: SeatGrid = SeatGrid::new(5, 4).unwrap();
    assert!(grid.contains(Seat::new(4, 3)));
    assert!(!grid.contains(Seat::new(5, 0)));
    assert!(!grid.contains(Seat::new(0, 4)));
    assert!(matches!(
        grid.check_contains(Seat::new(5, 0)),
        Err(DomainError::SeatOutOfGrid { row: 5, .. })
    ));
}

#[test]
fn test_seat_labels() {
    assert_eq!(Seat::new(0, 0).label(), "A1");
    assert_eq!(Seat::new(1, 3).label(), "B4");
    assert_eq!(Seat::new(4, 0).label(), "E1");
    assert_eq!(Seat::new(25, 0).label(), "Z1");
    assert_eq!(Seat::new(26, 0).label(), "AA1");
    assert_eq!(Seat::new(27, 9).label(), "AB10");
}

#[test]
fn test_seat_ordering_is_row_major() {
    assert!(Seat::new(0, 3) < Seat::new(1, 0));
    assert!(Seat::new(1, 0) < Seat::new(1, 1));
}

#[test]
fn test_add_does_not_touch_original() {
    let empty: PickedSeats = PickedSeats::new();
    let one: PickedSeats = empty.add(Seat::new(0, 0));

    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);
    assert!(one.is_picked(Seat::new(0, 0)));
}

#[test]
fn test_add_existing_seat_is_noop() {
    let seats: PickedSeats = picked(&[(0, 0), (1, 1)]);
    assert_eq!(seats.add(Seat::new(1, 1)), seats);
}

#[test]
fn test_remove_missing_seat_is_noop() {
    let seats: PickedSeats = picked(&[(0, 0)]);
    assert_eq!(seats.remove(Seat::new(3, 3)), seats);
}

#[test]
fn test_remove_picked_seat() {
    let seats: PickedSeats = picked(&[(0, 0), (1, 1)]);

    let remaining: PickedSeats = seats.remove(Seat::new(0, 0));

    assert!(!remaining.is_picked(Seat::new(0, 0)));
    assert!(remaining.is_picked(Seat::new(1, 1)));
    assert!(seats.is_picked(Seat::new(0, 0)));
}

#[test]
fn test_can_pick_bounded_by_ticket_count() {
    let ticket: Ticket = Ticket::new(2, 20).unwrap();

    let seats: PickedSeats = PickedSeats::new();
    assert!(seats.can_pick(ticket));

    let seats: PickedSeats = seats.add(Seat::new(0, 0));
    assert!(seats.can_pick(ticket));

    let seats: PickedSeats = seats.add(Seat::new(0, 1));
    assert!(!seats.can_pick(ticket));
}

#[test]
fn test_labels_in_row_major_order() {
    let seats: PickedSeats = picked(&[(2, 1), (0, 3), (0, 0)]);
    assert_eq!(seats.labels(), vec!["A1", "A4", "C2"]);
}

#[test]
fn test_picked_seats_save_and_restore() {
    let seats: PickedSeats = picked(&[(1, 2), (0, 0)]);

    let saved: String = serde_json::to_string(&seats).unwrap();
    assert_eq!(saved, r#"[{"row":0,"column":0},{"row":1,"column":2}]"#);

    let restored: PickedSeats = serde_json::from_str(&saved).unwrap();
    assert_eq!(restored, seats);
}

#[test]
fn test_ticket_bounds() {
    assert!(Ticket::new(0, 20).is_err());
    assert!(Ticket::new(21, 20).is_err());
    assert_eq!(Ticket::new(20, 20).unwrap().count(), 20);
    assert_eq!(Ticket::default().count(), 1);
}

#[test]
fn test_ticket_increase_and_decrease_saturate() {
    let ticket: Ticket = Ticket::new(1, 3).unwrap();

    assert_eq!(ticket.decreased().count(), 1);
    assert_eq!(ticket.increased(3).count(), 2);
    assert_eq!(ticket.increased(3).increased(3).increased(3).count(), 3);
}

#[test]
fn test_grid_deserialisation_rejects_empty_dimensions() {
    let grid: SeatGrid = serde_json::from_str(r#"{ "rows": 5, "columns": 4 }"#).unwrap();
    assert_eq!(grid.capacity(), 20);

    let empty: Result<SeatGrid, serde_json::Error> =
        serde_json::from_str(r#"{ "rows": 0, "columns": 4 }"#);
    assert!(empty.is_err());
}
