//! The per-step transition engine.

use crate::action::{Action, ActionMask};
use crate::error::StepError;
use crate::movement::{compute_action_mask, update_agent_positions};
use forage_core::Agent;
use forage_grid::Grid;

/// Post-move agents plus their legality masks for the following step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// Agents after movement and collision resolution, in input order.
    pub agents: Vec<Agent>,
    /// Per-agent legality masks computed against the post-move agents.
    pub action_masks: Vec<ActionMask>,
}

/// Applies one batch of actions per call.
///
/// The engine is stateless beyond its grid and physics flag: callers hold
/// the episode state and fold each [`StepResult`] back in. Both grid
/// variants use the same engine; only the generators differ.
#[derive(Clone, Copy, Debug)]
pub struct TransitionEngine {
    grid: Grid,
    others_influence: bool,
}

impl TransitionEngine {
    /// An engine over `grid` with the given collision physics.
    pub fn new(grid: Grid, others_influence: bool) -> Self {
        Self {
            grid,
            others_influence,
        }
    }

    /// The grid the engine resolves moves against.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Whether agents block and collide with each other.
    pub fn others_influence(&self) -> bool {
        self.others_influence
    }

    /// Apply one action per agent and return the post-move agents with
    /// their masks for the next step.
    ///
    /// Fails if the batch length does not match the agent count. Actions
    /// are applied as given; an illegal action simply resolves to a revert,
    /// so callers that want strict legality should check the previous
    /// step's masks before submitting.
    pub fn step(&self, agents: &[Agent], actions: &[Action]) -> Result<StepResult, StepError> {
        if agents.len() != actions.len() {
            return Err(StepError::ActionCountMismatch {
                agents: agents.len(),
                actions: actions.len(),
            });
        }
        let agents = update_agent_positions(agents, actions, self.grid, self.others_influence);
        let action_masks = agents
            .iter()
            .map(|agent| compute_action_mask(agent, &agents, self.grid))
            .collect();
        Ok(StepResult {
            agents,
            action_masks,
        })
    }

    /// [`TransitionEngine::step`] over raw action values, decoding each
    /// through the fixed table first.
    pub fn step_indices(
        &self,
        agents: &[Agent],
        actions: &[u32],
    ) -> Result<StepResult, StepError> {
        let decoded = actions
            .iter()
            .map(|&raw| Action::from_index(raw))
            .collect::<Result<Vec<_>, _>>()?;
        self.step(agents, &decoded)
    }
}
