//! The bounded 2D lattice with row-major flat indexing.

use crate::error::GridError;
use forage_core::Position;
use smallvec::SmallVec;

/// A finite 2D grid: `rows * cols` cells, origin at `(0, 0)`, exclusive
/// upper bounds at `rows` / `cols`.
///
/// Flat indexing is row-major: cell `(r, c)` has flat index `r * cols + c`.
/// The generators work on the flattened grid (mask arithmetic), the
/// transition engine on [`Position`] pairs; this type converts between the
/// two.
///
/// # Examples
///
/// ```
/// use forage_grid::Grid;
/// use forage_core::Position;
///
/// let grid = Grid::new(5, 5).unwrap();
/// assert_eq!(grid.cell_count(), 25);
/// assert_eq!(grid.flat_index(Position::new(2, 3)), Some(13));
/// assert_eq!(grid.position_of(13), Some(Position::new(2, 3)));
/// assert!(!grid.contains(Position::new(5, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Create a square grid with `size * size` cells.
    pub fn square(size: u32) -> Result<Self, GridError> {
        Self::new(size, size)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// True iff `pos` lies within bounds on both axes.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && pos.row < self.rows as i32 && pos.col < self.cols as i32
    }

    /// True iff `pos` is in bounds and not on the border ring.
    ///
    /// A 1xN or Nx1 grid has no interior.
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row >= 1
            && pos.col >= 1
            && pos.row < self.rows as i32 - 1
            && pos.col < self.cols as i32 - 1
    }

    /// Row-major flat index of `pos`, or `None` if out of bounds.
    pub fn flat_index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.cols as usize) + pos.col as usize)
    }

    /// Position of a flat index, or `None` if past the last cell.
    pub fn position_of(&self, flat: usize) -> Option<Position> {
        if flat >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Position::new((flat / cols) as i32, (flat % cols) as i32))
    }

    /// The in-bounds orthogonal (N/S/W/E) neighbours of `pos`.
    ///
    /// Interior cells have 4, edge cells 3, corner cells 2.
    pub fn orthogonal_neighbours(&self, pos: Position) -> SmallVec<[Position; 4]> {
        let offsets: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut result = SmallVec::new();
        for (dr, dc) in offsets {
            let nb = pos.offset(dr, dc);
            if self.contains(nb) {
                result.push(nb);
            }
        }
        result
    }

    /// Flat indices of the in-bounds orthogonal neighbours of a flat cell.
    ///
    /// Returns an empty list if `flat` itself is out of range.
    pub fn orthogonal_neighbours_flat(&self, flat: usize) -> SmallVec<[usize; 4]> {
        let Some(pos) = self.position_of(flat) else {
            return SmallVec::new();
        };
        self.orthogonal_neighbours(pos)
            .into_iter()
            .filter_map(|nb| self.flat_index(nb))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
        assert!(Grid::new(i32::MAX as u32, 1).is_ok());
    }

    #[test]
    fn square_is_symmetric() {
        let g = Grid::square(7).unwrap();
        assert_eq!(g.rows(), 7);
        assert_eq!(g.cols(), 7);
    }

    // ── Indexing tests ──────────────────────────────────────────

    #[test]
    fn flat_index_row_major() {
        let g = Grid::new(4, 6).unwrap();
        assert_eq!(g.flat_index(Position::new(0, 0)), Some(0));
        assert_eq!(g.flat_index(Position::new(0, 5)), Some(5));
        assert_eq!(g.flat_index(Position::new(1, 0)), Some(6));
        assert_eq!(g.flat_index(Position::new(3, 5)), Some(23));
    }

    #[test]
    fn flat_index_out_of_bounds_is_none() {
        let g = Grid::new(4, 6).unwrap();
        assert_eq!(g.flat_index(Position::new(-1, 0)), None);
        assert_eq!(g.flat_index(Position::new(0, 6)), None);
        assert_eq!(g.flat_index(Position::new(4, 0)), None);
    }

    #[test]
    fn position_of_past_end_is_none() {
        let g = Grid::new(3, 3).unwrap();
        assert_eq!(g.position_of(9), None);
        assert_eq!(g.position_of(8), Some(Position::new(2, 2)));
    }

    // ── Interior tests ──────────────────────────────────────────

    #[test]
    fn border_cells_are_not_interior() {
        let g = Grid::square(5).unwrap();
        assert!(g.is_interior(Position::new(1, 1)));
        assert!(g.is_interior(Position::new(3, 3)));
        assert!(!g.is_interior(Position::new(0, 2)));
        assert!(!g.is_interior(Position::new(2, 0)));
        assert!(!g.is_interior(Position::new(4, 2)));
        assert!(!g.is_interior(Position::new(2, 4)));
    }

    #[test]
    fn thin_grid_has_no_interior() {
        let g = Grid::new(1, 8).unwrap();
        for c in 0..8 {
            assert!(!g.is_interior(Position::new(0, c)));
        }
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid::square(5).unwrap();
        let n = g.orthogonal_neighbours(Position::new(2, 2));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Position::new(1, 2)));
        assert!(n.contains(&Position::new(3, 2)));
        assert!(n.contains(&Position::new(2, 1)));
        assert!(n.contains(&Position::new(2, 3)));
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid::square(5).unwrap();
        let n = g.orthogonal_neighbours(Position::new(0, 0));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&Position::new(1, 0)));
        assert!(n.contains(&Position::new(0, 1)));
    }

    #[test]
    fn neighbours_flat_matches_position_form() {
        let g = Grid::new(3, 4).unwrap();
        let flat = g.flat_index(Position::new(1, 1)).unwrap();
        let nbs = g.orthogonal_neighbours_flat(flat);
        assert_eq!(nbs.len(), 4);
        // (0,1)=1, (2,1)=9, (1,0)=4, (1,2)=6
        assert!(nbs.contains(&1));
        assert!(nbs.contains(&9));
        assert!(nbs.contains(&4));
        assert!(nbs.contains(&6));
    }

    #[test]
    fn neighbours_flat_out_of_range_is_empty() {
        let g = Grid::new(3, 3).unwrap();
        assert!(g.orthogonal_neighbours_flat(9).is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn flat_roundtrip(
            rows in 1u32..32,
            cols in 1u32..32,
            r in 0i32..32,
            c in 0i32..32,
        ) {
            let g = Grid::new(rows, cols).unwrap();
            let pos = Position::new(r % rows as i32, c % cols as i32);
            let flat = g.flat_index(pos).unwrap();
            prop_assert_eq!(g.position_of(flat), Some(pos));
        }

        #[test]
        fn neighbours_symmetric(
            rows in 1u32..16,
            cols in 1u32..16,
            r in 0i32..16,
            c in 0i32..16,
        ) {
            let g = Grid::new(rows, cols).unwrap();
            let pos = Position::new(r % rows as i32, c % cols as i32);
            for nb in g.orthogonal_neighbours(pos) {
                prop_assert!(g.orthogonal_neighbours(nb).contains(&pos));
            }
        }
    }
}
