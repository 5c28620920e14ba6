//! Layout generation for the open-field (no food) variant.

use crate::config::OpenFieldConfig;
use crate::error::GenerationError;
use crate::generator::{draw_level_pair, sample_positions};
use crate::rng::split_seed;
use forage_core::{Agent, AgentId, OpenState};
use forage_grid::CellMask;

/// Random layout generator for the open-field variant.
///
/// Agents may start anywhere on a rectangular grid, border included.
/// With collision physics on, fully pinned cells are withheld from
/// sampling so a free draw cannot land on a reserved cell.
#[derive(Clone, Debug)]
pub struct OpenFieldGenerator {
    config: OpenFieldConfig,
}

impl OpenFieldGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: OpenFieldConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &OpenFieldConfig {
        &self.config
    }

    /// Generate a full initial state for one episode.
    ///
    /// The seed splits into `[agents, levels, residual]`. Agents receive
    /// sequential ids `0..n-1` in sampling order and the agent level of
    /// one pair drawn from the configured table.
    pub fn generate(&self, seed: u64) -> Result<OpenState, GenerationError> {
        let [agent_seed, level_seed, residual] = split_seed::<3>(seed);

        let mut mask = CellMask::filled(self.config.grid());
        if self.config.others_influence() {
            for pin in self.config.pinned_agents() {
                if let (Some(row), Some(col)) = (pin.row, pin.col) {
                    mask.clear_position((row, col).into());
                }
            }
        }
        let positions = sample_positions(
            agent_seed,
            &mask,
            self.config.num_agents(),
            self.config.others_influence(),
            self.config.pinned_agents(),
        )?;

        let pair = draw_level_pair(level_seed, self.config.level_pairs());
        let agents = positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| Agent::new(AgentId(i as u32), pos, pair.agent))
            .collect();
        Ok(OpenState::new(residual, agents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinnedCell;
    use forage_core::{Entity, LevelPair, Position};

    fn config(rows: u32, cols: u32, num_agents: usize) -> OpenFieldConfig {
        OpenFieldConfig::builder()
            .grid(rows, cols)
            .num_agents(num_agents)
            .level_pairs(vec![LevelPair::new(2, 3)])
            .build()
            .unwrap()
    }

    #[test]
    fn generate_is_deterministic() {
        let generator = OpenFieldGenerator::new(config(4, 7, 3));
        assert_eq!(generator.generate(10).unwrap(), generator.generate(10).unwrap());
        assert_ne!(generator.generate(10).unwrap(), generator.generate(11).unwrap());
    }

    #[test]
    fn agents_land_in_bounds_with_sequential_ids() {
        let generator = OpenFieldGenerator::new(config(4, 7, 3));
        let grid = generator.config().grid();
        for seed in 0..16 {
            let state = generator.generate(seed).unwrap();
            assert_eq!(state.agents.len(), 3);
            assert_eq!(state.step_count.0, 0);
            for (i, agent) in state.agents.iter().enumerate() {
                assert_eq!(agent.id(), AgentId(i as u32));
                assert!(grid.contains(agent.position()));
                assert_eq!(agent.level(), forage_core::Level(2));
                assert!(!agent.is_loading());
            }
        }
    }

    #[test]
    fn influence_keeps_agents_distinct() {
        let cfg = OpenFieldConfig::builder()
            .grid(3, 3)
            .num_agents(6)
            .level_pairs(vec![LevelPair::new(1, 1)])
            .others_influence(true)
            .build()
            .unwrap();
        let generator = OpenFieldGenerator::new(cfg);
        for seed in 0..16 {
            let state = generator.generate(seed).unwrap();
            for (i, a) in state.agents.iter().enumerate() {
                for b in &state.agents[i + 1..] {
                    assert_ne!(a.position(), b.position());
                }
            }
        }
    }

    #[test]
    fn pinned_cells_are_reserved_under_influence() {
        let cfg = OpenFieldConfig::builder()
            .grid(3, 3)
            .num_agents(3)
            .level_pairs(vec![LevelPair::new(1, 1)])
            .pinned_agents(vec![
                PinnedCell::at(1, 1),
                PinnedCell::free(),
                PinnedCell::free(),
            ])
            .others_influence(true)
            .build()
            .unwrap();
        let generator = OpenFieldGenerator::new(cfg);
        for seed in 0..16 {
            let state = generator.generate(seed).unwrap();
            assert_eq!(state.agents[0].position(), Position::new(1, 1));
            // Free draws never land on the reserved cell.
            assert_ne!(state.agents[1].position(), Position::new(1, 1));
            assert_ne!(state.agents[2].position(), Position::new(1, 1));
        }
    }

    #[test]
    fn too_many_agents_for_the_grid_fails() {
        let cfg = OpenFieldConfig::builder()
            .grid(2, 2)
            .num_agents(5)
            .level_pairs(vec![LevelPair::new(1, 1)])
            .others_influence(true)
            .build()
            .unwrap();
        let err = OpenFieldGenerator::new(cfg).generate(0).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InsufficientSpace {
                needed: 5,
                placed: 4,
            }
        );
    }
}
