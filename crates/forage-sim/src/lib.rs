//! Layout generators and transition engine for the Forage simulation.
//!
//! Two independent components share the core data model:
//!
//! - **Generators** ([`ForagingGenerator`], [`OpenFieldGenerator`]) build a
//!   conflict-free initial episode state from a seed: food placed on
//!   interior cells with no two items adjacent, agents placed on the
//!   remaining cells, one level pair drawn and broadcast.
//! - **The engine** ([`TransitionEngine`]) consumes a state snapshot plus
//!   one action per agent and produces moved agents (simultaneous,
//!   single-pass collision resolution) and per-agent legal-action masks.
//!
//! Determinism is total: every random draw derives from an explicitly
//! split seed, so a fixed seed reproduces an episode bit-identically.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod movement;
pub mod open_field;
pub mod rng;

pub use action::{Action, ActionMask};
pub use config::{ForagingConfig, OpenFieldConfig, PinnedCell};
pub use engine::{StepResult, TransitionEngine};
pub use error::{ConfigError, GenerationError, StepError};
pub use generator::{sample_levels, ForagingGenerator};
pub use movement::{
    compute_action_mask, fix_collisions, simulate_agent_movement, update_agent_positions,
};
pub use open_field::OpenFieldGenerator;
