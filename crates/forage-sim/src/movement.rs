//! Per-step agent movement, collision resolution, and legality masks.
//!
//! Movement is resolved against a pre-move snapshot: every agent's action
//! is evaluated against where the others stood at the start of the step,
//! never against where they are mid-resolution. A move that would leave
//! the grid, or (with collision physics on) land on a snapshot-occupied
//! cell, reverts to the agent's original position.

use crate::action::{Action, ActionMask};
use forage_core::{Agent, Entity, Position};
use forage_grid::Grid;
use indexmap::IndexMap;

/// Apply one agent's action against the pre-move snapshot.
///
/// The result keeps the agent's original position when the target cell is
/// out of bounds, or when `others_influence` is set and another agent
/// occupied the target at the start of the step. The loading flag is not
/// touched here.
pub fn simulate_agent_movement(
    agent: &Agent,
    action: Action,
    agents: &[Agent],
    grid: Grid,
    others_influence: bool,
) -> Agent {
    let (drow, dcol) = action.delta();
    let target = agent.position().offset(drow, dcol);
    if !grid.contains(target) {
        return *agent;
    }
    if others_influence {
        let blocked = agents
            .iter()
            .any(|other| other.id() != agent.id() && other.position() == target);
        if blocked {
            return *agent;
        }
    }
    agent.with_position(target)
}

/// Revert agents whose resolved positions coincide.
///
/// A single pass: positions are counted across the whole moved batch, and
/// every agent standing on a cell claimed more than once is returned to
/// its position in `original`. One round only; reverts may themselves
/// create new overlaps with agents that did not move, and those stand.
pub fn fix_collisions(moved: &[Agent], original: &[Agent]) -> Vec<Agent> {
    let mut counts: IndexMap<Position, u32> = IndexMap::with_capacity(moved.len());
    for agent in moved {
        *counts.entry(agent.position()).or_insert(0) += 1;
    }
    moved
        .iter()
        .zip(original)
        .map(|(agent, before)| {
            let contested = counts.get(&agent.position()).copied().unwrap_or(0) > 1;
            if contested {
                *before
            } else {
                *agent
            }
        })
        .collect()
}

/// Resolve a full batch of actions into post-move agents.
///
/// Every agent moves against the same pre-move snapshot. With collision
/// physics on, contested cells are then reverted and each agent's loading
/// flag is set iff its action was [`Action::Load`]; with physics off the
/// loading flags carry over unchanged.
pub fn update_agent_positions(
    agents: &[Agent],
    actions: &[Action],
    grid: Grid,
    others_influence: bool,
) -> Vec<Agent> {
    let moved: Vec<Agent> = agents
        .iter()
        .zip(actions)
        .map(|(agent, &action)| {
            simulate_agent_movement(agent, action, agents, grid, others_influence)
        })
        .collect();
    if !others_influence {
        return moved;
    }
    fix_collisions(&moved, agents)
        .into_iter()
        .zip(actions)
        .map(|(agent, &action)| agent.with_loading(action == Action::Load))
        .collect()
}

/// Compute the legality mask for one agent against the current agents.
///
/// An action is legal iff its target cell is in bounds and not occupied by
/// a different agent. `NoOp` and `Load` target the agent's own cell and so
/// are always legal.
pub fn compute_action_mask(agent: &Agent, agents: &[Agent], grid: Grid) -> ActionMask {
    let mut legal = [false; Action::COUNT];
    for action in Action::ALL {
        let (drow, dcol) = action.delta();
        let target = agent.position().offset(drow, dcol);
        let occupied = agents
            .iter()
            .any(|other| other.id() != agent.id() && other.position() == target);
        legal[action.index()] = grid.contains(target) && !occupied;
    }
    ActionMask::new(legal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::{AgentId, Level};

    fn agent(id: u32, row: i32, col: i32) -> Agent {
        Agent::new(AgentId(id), Position::new(row, col), Level(1))
    }

    fn grid5() -> Grid {
        Grid::square(5).unwrap()
    }

    // ── simulate_agent_movement ─────────────────────────────────

    #[test]
    fn each_direction_moves_one_cell() {
        let a = agent(0, 2, 2);
        let cases = [
            (Action::Up, Position::new(1, 2)),
            (Action::Down, Position::new(3, 2)),
            (Action::Left, Position::new(2, 1)),
            (Action::Right, Position::new(2, 3)),
            (Action::NoOp, Position::new(2, 2)),
            (Action::Load, Position::new(2, 2)),
        ];
        for (action, expected) in cases {
            let moved = simulate_agent_movement(&a, action, &[a], grid5(), false);
            assert_eq!(moved.position(), expected, "action {action}");
        }
    }

    #[test]
    fn out_of_bounds_move_reverts() {
        let corner = agent(0, 0, 0);
        for action in [Action::Up, Action::Left] {
            let moved = simulate_agent_movement(&corner, action, &[corner], grid5(), false);
            assert_eq!(moved.position(), corner.position());
        }
        let far = agent(0, 4, 4);
        for action in [Action::Down, Action::Right] {
            let moved = simulate_agent_movement(&far, action, &[far], grid5(), false);
            assert_eq!(moved.position(), far.position());
        }
    }

    #[test]
    fn occupied_target_blocks_only_with_influence() {
        let a = agent(0, 2, 2);
        let b = agent(1, 2, 3);
        let agents = [a, b];
        let blocked = simulate_agent_movement(&a, Action::Right, &agents, grid5(), true);
        assert_eq!(blocked.position(), a.position());
        let free = simulate_agent_movement(&a, Action::Right, &agents, grid5(), false);
        assert_eq!(free.position(), b.position());
    }

    #[test]
    fn own_cell_never_blocks() {
        let a = agent(0, 2, 2);
        let moved = simulate_agent_movement(&a, Action::NoOp, &[a], grid5(), true);
        assert_eq!(moved.position(), a.position());
    }

    // ── fix_collisions ──────────────────────────────────────────

    #[test]
    fn contested_cell_reverts_both_agents() {
        let original = [agent(0, 2, 1), agent(1, 2, 3)];
        // Both resolved onto (2, 2).
        let moved = [
            original[0].with_position(Position::new(2, 2)),
            original[1].with_position(Position::new(2, 2)),
        ];
        let fixed = fix_collisions(&moved, &original);
        assert_eq!(fixed[0].position(), Position::new(2, 1));
        assert_eq!(fixed[1].position(), Position::new(2, 3));
    }

    #[test]
    fn uncontested_moves_stand() {
        let original = [agent(0, 0, 0), agent(1, 4, 4)];
        let moved = [
            original[0].with_position(Position::new(0, 1)),
            original[1].with_position(Position::new(4, 3)),
        ];
        let fixed = fix_collisions(&moved, &original);
        assert_eq!(fixed, moved);
    }

    #[test]
    fn fix_is_idempotent_without_duplicates() {
        let original = [agent(0, 1, 1), agent(1, 3, 3)];
        let fixed = fix_collisions(&original, &original);
        assert_eq!(fixed, original);
    }

    #[test]
    fn single_pass_leaves_secondary_overlap() {
        // Agent 1 moves onto agent 2's contested-free cell while agents 0
        // and 2 contest a different cell: the revert of agent 2 back onto
        // its original cell is not re-checked against agent 1's move.
        let original = [agent(0, 2, 1), agent(1, 1, 3), agent(2, 2, 3)];
        let moved = [
            original[0].with_position(Position::new(2, 2)),
            original[1].with_position(Position::new(2, 3)),
            original[2].with_position(Position::new(2, 2)),
        ];
        let fixed = fix_collisions(&moved, &original);
        assert_eq!(fixed[0].position(), Position::new(2, 1));
        assert_eq!(fixed[1].position(), Position::new(2, 3));
        assert_eq!(fixed[2].position(), Position::new(2, 3));
    }

    // ── update_agent_positions ──────────────────────────────────

    #[test]
    fn head_on_conflict_reverts_both() {
        let agents = [agent(0, 2, 1), agent(1, 2, 3)];
        let out = update_agent_positions(
            &agents,
            &[Action::Right, Action::Left],
            grid5(),
            true,
        );
        assert_eq!(out[0].position(), agents[0].position());
        assert_eq!(out[1].position(), agents[1].position());
    }

    #[test]
    fn swap_attempt_blocks_on_snapshot() {
        // Adjacent agents trying to swap each see the other's snapshot
        // cell as occupied, so neither moves.
        let agents = [agent(0, 2, 2), agent(1, 2, 3)];
        let out = update_agent_positions(
            &agents,
            &[Action::Right, Action::Left],
            grid5(),
            true,
        );
        assert_eq!(out[0].position(), Position::new(2, 2));
        assert_eq!(out[1].position(), Position::new(2, 3));
    }

    #[test]
    fn swap_succeeds_without_influence() {
        let agents = [agent(0, 2, 2), agent(1, 2, 3)];
        let out = update_agent_positions(
            &agents,
            &[Action::Right, Action::Left],
            grid5(),
            false,
        );
        assert_eq!(out[0].position(), Position::new(2, 3));
        assert_eq!(out[1].position(), Position::new(2, 2));
    }

    #[test]
    fn vacated_cell_is_still_blocked_within_the_step() {
        // Agent 1 leaves (2, 3) this step, but agent 0 moves against the
        // snapshot and reverts anyway.
        let agents = [agent(0, 2, 2), agent(1, 2, 3)];
        let out = update_agent_positions(
            &agents,
            &[Action::Right, Action::Right],
            grid5(),
            true,
        );
        assert_eq!(out[0].position(), Position::new(2, 2));
        assert_eq!(out[1].position(), Position::new(2, 4));
    }

    #[test]
    fn loading_tracks_load_action_with_influence() {
        let agents = [agent(0, 1, 1), agent(1, 3, 3)];
        let out = update_agent_positions(&agents, &[Action::Load, Action::NoOp], grid5(), true);
        assert!(out[0].is_loading());
        assert!(!out[1].is_loading());
        // NoOp on the next step clears the flag.
        let next = update_agent_positions(&out, &[Action::NoOp, Action::NoOp], grid5(), true);
        assert!(!next[0].is_loading());
    }

    #[test]
    fn loading_carries_over_without_influence() {
        let loaded = agent(0, 1, 1).with_loading(true);
        let out = update_agent_positions(&[loaded], &[Action::NoOp], grid5(), false);
        assert!(out[0].is_loading());
    }

    // ── compute_action_mask ─────────────────────────────────────

    #[test]
    fn interior_agent_alone_has_all_actions() {
        let a = agent(0, 2, 2);
        let mask = compute_action_mask(&a, &[a], grid5());
        assert_eq!(mask.as_array(), [true; Action::COUNT]);
    }

    #[test]
    fn corner_masks_out_of_bounds_directions() {
        let a = agent(0, 0, 0);
        let mask = compute_action_mask(&a, &[a], grid5());
        assert!(mask.is_legal(Action::NoOp));
        assert!(mask.is_legal(Action::Load));
        assert!(!mask.is_legal(Action::Up));
        assert!(!mask.is_legal(Action::Left));
        assert!(mask.is_legal(Action::Down));
        assert!(mask.is_legal(Action::Right));
    }

    #[test]
    fn neighbouring_agent_masks_that_direction() {
        let a = agent(0, 2, 2);
        let b = agent(1, 2, 3);
        let mask = compute_action_mask(&a, &[a, b], grid5());
        assert!(!mask.is_legal(Action::Right));
        assert!(mask.is_legal(Action::Left));
        assert!(mask.is_legal(Action::NoOp));
    }

    #[test]
    fn mask_agrees_with_movement_under_influence() {
        let a = agent(0, 1, 0);
        let b = agent(1, 1, 1);
        let agents = [a, b];
        let grid = grid5();
        let mask = compute_action_mask(&a, &agents, grid);
        for action in Action::ALL {
            let moved = simulate_agent_movement(&a, action, &agents, grid, true);
            let changed_or_stationary =
                moved.position() != a.position() || action.delta() == (0, 0);
            assert_eq!(
                mask.is_legal(action),
                changed_or_stationary,
                "action {action}"
            );
        }
    }
}
