//! Error types for configuration, generation, and stepping.
//!
//! All failures are local and synchronous: configuration problems are
//! rejected eagerly at `build()`, generation problems surface from
//! `generate()`, action problems from `step()`. Nothing is retried or
//! recovered internally.

use forage_grid::GridError;
use std::error::Error;
use std::fmt;

/// Invalid static parameters, rejected at configuration build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimension is below the supported minimum.
    GridTooSmall {
        /// The requested size.
        size: u32,
        /// The minimum supported size.
        min: u32,
    },
    /// The underlying grid could not be constructed.
    Grid(GridError),
    /// Field of view outside `1..=max_dimension`.
    FovOutOfRange {
        /// The requested field of view.
        fov: u32,
        /// The largest permitted value.
        max: u32,
    },
    /// The agent count is zero.
    NoAgents,
    /// The food count is zero.
    NoFood,
    /// The allowed level-pair table is empty.
    NoLevelPairs,
    /// A pinned-cell list is neither empty nor exactly count-length.
    PinnedCountMismatch {
        /// Which list ("agents" or "food").
        kind: &'static str,
        /// Number of entities of that kind.
        expected: usize,
        /// Length of the supplied pinned list.
        got: usize,
    },
    /// A pinned axis value lies outside the grid.
    PinnedOutOfBounds {
        /// Which list ("agents" or "food").
        kind: &'static str,
        /// Index of the offending entry.
        index: usize,
    },
    /// A level range with `min > max`.
    InvalidLevelRange {
        /// Lower bound supplied.
        min: u32,
        /// Upper bound supplied.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size, min } => {
                write!(f, "grid size {size} below minimum {min}")
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::FovOutOfRange { fov, max } => {
                write!(f, "field of view {fov} outside 1..={max}")
            }
            Self::NoAgents => write!(f, "number of agents must be positive"),
            Self::NoFood => write!(f, "number of food items must be positive"),
            Self::NoLevelPairs => write!(f, "allowed level-pair table is empty"),
            Self::PinnedCountMismatch {
                kind,
                expected,
                got,
            } => write!(
                f,
                "pinned {kind} list has {got} entries, expected 0 or {expected}"
            ),
            Self::PinnedOutOfBounds { kind, index } => {
                write!(f, "pinned {kind} entry {index} is out of grid bounds")
            }
            Self::InvalidLevelRange { min, max } => {
                write!(f, "level range {min}..={max} is empty")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Failures while generating an initial layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// The candidate mask was exhausted before all entities were placed.
    ///
    /// The grid is too small or too crowded to satisfy the non-adjacency /
    /// non-border constraints for the requested counts.
    InsufficientSpace {
        /// Entities that needed placement.
        needed: usize,
        /// Entities successfully placed before exhaustion.
        placed: usize,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSpace { needed, placed } => write!(
                f,
                "insufficient space: placed {placed} of {needed} entities before the \
                 candidate mask was exhausted"
            ),
        }
    }
}

impl Error for GenerationError {}

/// Failures while applying a batch of actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// An action value outside the fixed action table.
    InvalidActionIndex {
        /// The offending raw value.
        index: u32,
    },
    /// The action batch length does not match the agent count.
    ActionCountMismatch {
        /// Number of agents in the state.
        agents: usize,
        /// Number of actions supplied.
        actions: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidActionIndex { index } => {
                write!(f, "action index {index} outside the action table")
            }
            Self::ActionCountMismatch { agents, actions } => {
                write!(f, "got {actions} actions for {agents} agents")
            }
        }
    }
}

impl Error for StepError {}
