//! Per-episode simulation state aggregates.
//!
//! Two structurally parallel variants: [`State`] for the foraging grid
//! (agents and food) and [`OpenState`] for the open-field grid (agents
//! only). Both are owned values: the transition engine never mutates a
//! state in place, callers fold engine output back in with `advanced`.

use crate::entity::{Agent, Food};
use crate::id::StepCount;

/// Episode state for the foraging variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    /// Residual seed retained for randomness needed after reset.
    pub seed: u64,
    /// Number of engine steps folded into this state.
    pub step_count: StepCount,
    /// All agents, indexed by id.
    pub agents: Vec<Agent>,
    /// All food items, indexed by id.
    pub food: Vec<Food>,
}

impl State {
    /// Assemble a freshly generated state with the step counter at zero.
    pub fn new(seed: u64, agents: Vec<Agent>, food: Vec<Food>) -> Self {
        Self {
            seed,
            step_count: StepCount(0),
            agents,
            food,
        }
    }

    /// The state after one engine step produced `agents`.
    ///
    /// Food and the residual seed carry over unchanged; the step counter
    /// advances by one.
    pub fn advanced(&self, agents: Vec<Agent>) -> Self {
        Self {
            seed: self.seed,
            step_count: self.step_count.next(),
            agents,
            food: self.food.clone(),
        }
    }

    /// The state with the food collection replaced.
    ///
    /// Used by reward logic (outside this core) to mark items eaten.
    pub fn with_food(&self, food: Vec<Food>) -> Self {
        Self {
            food,
            ..self.clone()
        }
    }
}

/// Episode state for the open-field variant (no food).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenState {
    /// Residual seed retained for randomness needed after reset.
    pub seed: u64,
    /// Number of engine steps folded into this state.
    pub step_count: StepCount,
    /// All agents, indexed by id.
    pub agents: Vec<Agent>,
}

impl OpenState {
    /// Assemble a freshly generated state with the step counter at zero.
    pub fn new(seed: u64, agents: Vec<Agent>) -> Self {
        Self {
            seed,
            step_count: StepCount(0),
            agents,
        }
    }

    /// The state after one engine step produced `agents`.
    pub fn advanced(&self, agents: Vec<Agent>) -> Self {
        Self {
            seed: self.seed,
            step_count: self.step_count.next(),
            agents,
        }
    }
}
