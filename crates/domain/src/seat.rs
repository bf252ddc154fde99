// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat identity and the fixed seat grid of a theater.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A bookable position in the seat grid.
///
/// Ordering is row-major: field order (`row`, then `column`) drives the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat {
    /// Zero-based row index.
    pub row: u16,
    /// Zero-based column index.
    pub column: u16,
}

impl Seat {
    #[must_use]
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }

    /// Returns the display label, e.g. `A1` for row 0, column 0.
    ///
    /// Rows are lettered `A`..`Z`, then `AA`, `AB`, and so on.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", row_letters(self.row), u32::from(self.column) + 1)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bijective base-26 lettering of a zero-based row index.
fn row_letters(row: u16) -> String {
    let mut letters: Vec<char> = Vec::new();
    let mut n: u32 = u32::from(row) + 1;
    while n > 0 {
        let rem: u32 = (n - 1) % 26;
        letters.push(char::from(b'A' + u8::try_from(rem).unwrap_or(0)));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// The rectangular grid of seats in a theater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridParts", into = "GridParts")]
pub struct SeatGrid {
    rows: u16,
    columns: u16,
}

#[derive(Serialize, Deserialize)]
struct GridParts {
    rows: u16,
    columns: u16,
}

impl TryFrom<GridParts> for SeatGrid {
    type Error = DomainError;

    fn try_from(parts: GridParts) -> Result<Self, Self::Error> {
        Self::new(parts.rows, parts.columns)
    }
}

impl From<SeatGrid> for GridParts {
    fn from(grid: SeatGrid) -> Self {
        Self {
            rows: grid.rows,
            columns: grid.columns,
        }
    }
}

impl SeatGrid {
    /// Creates a new `SeatGrid`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGrid` if either dimension is zero.
    pub const fn new(rows: u16, columns: u16) -> Result<Self, DomainError> {
        if rows == 0 || columns == 0 {
            return Err(DomainError::InvalidGrid { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Total number of seats, saturating at `u16::MAX`.
    #[must_use]
    pub const fn capacity(&self) -> u16 {
        self.rows.saturating_mul(self.columns)
    }

    #[must_use]
    pub const fn contains(&self, seat: Seat) -> bool {
        seat.row < self.rows && seat.column < self.columns
    }

    /// Checks that a seat lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SeatOutOfGrid` if it does not.
    pub const fn check_contains(&self, seat: Seat) -> Result<(), DomainError> {
        if !self.contains(seat) {
            return Err(DomainError::SeatOutOfGrid {
                row: seat.row,
                column: seat.column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Every seat in the grid, in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = Seat> + use<> {
        let columns: u16 = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Seat::new(row, column)))
    }
}
