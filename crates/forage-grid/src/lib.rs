//! Grid geometry for the Forage simulation.
//!
//! Defines the bounded 2D lattice ([`Grid`]) with row-major flat indexing,
//! the boolean occupancy mask over the flattened grid ([`CellMask`]) that
//! the layout generators thread through their sequential draws, and the
//! adjacency predicates used by loading/interaction logic.
//!
//! Everything here is pure geometry: no randomness, no entity semantics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod error;
pub mod grid;
pub mod mask;

pub use adjacency::{are_entities_adjacent, are_positions_adjacent};
pub use error::GridError;
pub use grid::Grid;
pub use mask::CellMask;
