//! Boolean candidate masks over the flattened grid.

use crate::grid::Grid;
use forage_core::Position;

/// A candidate mask over the flattened grid: one bit per cell, set meaning
/// "available for placement".
///
/// The food generator threads a mask through its sequential draws, clearing
/// each chosen cell and its orthogonal neighbours so the no-adjacency
/// constraint holds by construction. The agent generator uses a mask to
/// exclude occupied cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    grid: Grid,
    cells: Vec<bool>,
}

impl CellMask {
    /// A mask with every cell set.
    pub fn filled(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![true; grid.cell_count()],
        }
    }

    /// A mask with only the interior (non-border) cells set.
    ///
    /// Grids thinner than 3 cells on either axis yield an all-clear mask.
    pub fn interior(grid: Grid) -> Self {
        let mut mask = Self::filled(grid);
        for flat in 0..grid.cell_count() {
            // position_of is total over 0..cell_count
            if let Some(pos) = grid.position_of(flat) {
                if !grid.is_interior(pos) {
                    mask.cells[flat] = false;
                }
            }
        }
        mask
    }

    /// The grid this mask covers.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// True iff the flat cell is set. Out-of-range indices read as clear.
    pub fn is_set(&self, flat: usize) -> bool {
        self.cells.get(flat).copied().unwrap_or(false)
    }

    /// Set a flat cell. Out-of-range indices are ignored.
    pub fn set(&mut self, flat: usize) {
        if let Some(cell) = self.cells.get_mut(flat) {
            *cell = true;
        }
    }

    /// Clear a flat cell. Out-of-range indices are ignored.
    pub fn clear(&mut self, flat: usize) {
        if let Some(cell) = self.cells.get_mut(flat) {
            *cell = false;
        }
    }

    /// Clear the cell at `pos`. Out-of-bounds positions are ignored.
    pub fn clear_position(&mut self, pos: Position) {
        if let Some(flat) = self.grid.flat_index(pos) {
            self.clear(flat);
        }
    }

    /// Clear a cell and its in-bounds orthogonal neighbours.
    ///
    /// This is the exclusion step between dependent food draws: once a food
    /// lands on a cell, neither that cell nor any cell at Manhattan
    /// distance 1 may receive another item.
    pub fn clear_with_orthogonals(&mut self, flat: usize) {
        self.clear(flat);
        for nb in self.grid.orthogonal_neighbours_flat(flat) {
            self.clear(nb);
        }
    }

    /// Clear the cell at `pos` and its in-bounds orthogonal neighbours.
    ///
    /// Position-level form of [`CellMask::clear_with_orthogonals`].
    pub fn clear_around(&mut self, pos: Position) {
        if let Some(flat) = self.grid.flat_index(pos) {
            self.clear_with_orthogonals(flat);
        }
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Flat index of the k-th set cell in row-major order.
    ///
    /// Returns `None` when fewer than `k + 1` cells are set. Combined with
    /// a uniform draw over `0..count_set()`, this selects uniformly among
    /// the available cells.
    pub fn nth_set(&self, k: usize) -> Option<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .nth(k)
            .map(|(flat, _)| flat)
    }

    /// Position of the k-th set cell in row-major order.
    ///
    /// Position-level form of [`CellMask::nth_set`].
    pub fn nth_set_position(&self, k: usize) -> Option<Position> {
        self.nth_set(k).and_then(|flat| self.grid.position_of(flat))
    }
}
