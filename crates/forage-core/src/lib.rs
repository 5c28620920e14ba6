//! Core types for the Forage level-based foraging simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model shared by the layout generators and the transition engine:
//! entity ids, grid positions, levels, the [`Entity`] trait, the immutable
//! [`Agent`] and [`Food`] values, and the per-episode [`State`] aggregates.
//!
//! Everything here is a plain value: updates go through copy-and-modify
//! constructors (`with_position`, `with_loading`, `consumed`) so callers
//! always hold a consistent snapshot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entity;
pub mod id;
pub mod level;
pub mod position;
pub mod state;

pub use entity::{Agent, Entity, Food};
pub use id::{AgentId, FoodId, StepCount};
pub use level::{Level, LevelPair};
pub use position::Position;
pub use state::{OpenState, State};
