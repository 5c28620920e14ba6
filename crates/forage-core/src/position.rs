//! Integer grid coordinates.

use std::fmt;

/// A cell coordinate on the simulation grid.
///
/// `row` grows downward and `col` grows rightward, both from the origin at
/// `(0, 0)`. Coordinates are signed so that candidate moves can step past
/// the boundary before being rejected; validated positions always lie in
/// `[0, rows) x [0, cols)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (first axis, flat-major).
    pub row: i32,
    /// Column index (second axis).
    pub col: i32,
}

impl Position {
    /// Construct a position from row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position displaced by `(drow, dcol)`.
    ///
    /// No bounds check is performed; the result may lie outside any grid.
    pub fn offset(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Chebyshev (L-infinity) distance to `other`.
    pub fn chebyshev(self, other: Self) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
