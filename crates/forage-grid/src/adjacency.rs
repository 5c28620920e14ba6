//! Adjacency predicates between entities on the grid.

use forage_core::{Entity, Position};

/// True iff two positions are adjacent on the grid.
///
/// Without diagonals this is Manhattan distance exactly 1 (the four
/// orthogonal neighbours; a cell is not adjacent to itself). With
/// diagonals it is Chebyshev distance at most 1, so co-located positions
/// count as adjacent.
pub fn are_positions_adjacent(a: Position, b: Position, enable_diagonals: bool) -> bool {
    if enable_diagonals {
        a.chebyshev(b) <= 1
    } else {
        a.manhattan(b) == 1
    }
}

/// True iff two entities occupy adjacent cells.
///
/// Pure geometric predicate used by loading/interaction checks: an agent
/// can attempt to collect a food item only when this holds between them.
pub fn are_entities_adjacent(a: &impl Entity, b: &impl Entity, enable_diagonals: bool) -> bool {
    are_positions_adjacent(a.position(), b.position(), enable_diagonals)
}
