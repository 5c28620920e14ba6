//! Forage: a deterministic level-based foraging grid-world core for
//! multi-agent reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Forage sub-crates. For most users, adding `forage` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use forage::prelude::*;
//!
//! // An 8x8 grid with two agents and two food items.
//! let config = ForagingConfig::builder()
//!     .grid_size(8)
//!     .num_agents(2)
//!     .num_food(2)
//!     .level_pairs(vec![LevelPair::new(1, 2)])
//!     .others_influence(true)
//!     .build()
//!     .unwrap();
//! let generator = ForagingGenerator::new(config);
//! let engine = TransitionEngine::new(generator.config().grid(), true);
//!
//! // The same seed always yields the same layout.
//! let state = generator.generate(42).unwrap();
//! assert_eq!(state, generator.generate(42).unwrap());
//!
//! // Step every agent once; nobody may leave the grid.
//! let actions = vec![Action::Down; state.agents.len()];
//! let result = engine.step(&state.agents, &actions).unwrap();
//! for agent in &result.agents {
//!     assert!(generator.config().grid().contains(agent.position()));
//! }
//! let state = state.advanced(result.agents);
//! assert_eq!(state.step_count.0, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `forage-core` | IDs, levels, positions, entities, states |
//! | [`grid`] | `forage-grid` | Grid geometry, cell masks, adjacency |
//! | [`sim`] | `forage-sim` | Generators, transition engine, actions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`forage-core`).
///
/// Contains the entity types ([`types::Agent`], [`types::Food`]), newtype
/// ids, levels, positions, and the per-episode state aggregates.
pub use forage_core as types;

/// Grid geometry and candidate masks (`forage-grid`).
///
/// Provides [`grid::Grid`] bounds and indexing, [`grid::CellMask`]
/// placement masks, and the adjacency predicates.
pub use forage_grid as grid;

/// Generators and the transition engine (`forage-sim`).
///
/// [`sim::ForagingGenerator`] and [`sim::OpenFieldGenerator`] build
/// initial layouts; [`sim::TransitionEngine`] applies action batches.
pub use forage_sim as sim;

/// Common imports for typical Forage usage.
///
/// ```rust
/// use forage::prelude::*;
/// ```
///
/// This imports the most frequently used types: configurations and
/// generators, the engine, the action table, and the core data model.
pub mod prelude {
    // Core data model
    pub use forage_core::{
        Agent, AgentId, Entity, Food, FoodId, Level, LevelPair, OpenState, Position, State,
        StepCount,
    };

    // Grid geometry
    pub use forage_grid::{CellMask, Grid};

    // Errors
    pub use forage_sim::{ConfigError, GenerationError, StepError};

    // Generators and engine
    pub use forage_sim::{
        Action, ActionMask, ForagingConfig, ForagingGenerator, OpenFieldConfig,
        OpenFieldGenerator, PinnedCell, StepResult, TransitionEngine,
    };
}
