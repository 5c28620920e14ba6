//! Layout generation for the foraging (food-bearing) variant.
//!
//! Builds a conflict-free initial [`State`] from a seed: food items on
//! interior cells with no two items orthogonally adjacent, agents on the
//! remaining cells, and one level pair drawn from the configured table and
//! broadcast across the episode.

use crate::config::{ForagingConfig, PinnedCell};
use crate::error::{ConfigError, GenerationError};
use crate::rng::{rng_from, split_seed, split_seed_n};
use forage_core::{Agent, AgentId, Food, FoodId, Level, LevelPair, Position, State};
use forage_grid::CellMask;
use rand::Rng;

/// Draw `count` positions uniformly from the set cells of `mask`.
///
/// When `without_replacement` is set, each chosen cell is cleared before
/// the next draw so no two results coincide; otherwise draws are
/// independent and may repeat. Pinned-cell overrides are applied per axis
/// after sampling. Fails with `InsufficientSpace` if the mask runs dry.
pub(crate) fn sample_positions(
    seed: u64,
    mask: &CellMask,
    count: usize,
    without_replacement: bool,
    pins: &[PinnedCell],
) -> Result<Vec<Position>, GenerationError> {
    let mut working = mask.clone();
    let mut rng = rng_from(seed);
    let mut positions = Vec::with_capacity(count);
    for placed in 0..count {
        let remaining = working.count_set();
        if remaining == 0 {
            return Err(GenerationError::InsufficientSpace {
                needed: count,
                placed,
            });
        }
        let k = rng.random_range(0..remaining);
        let Some(pos) = working.nth_set_position(k) else {
            return Err(GenerationError::InsufficientSpace {
                needed: count,
                placed,
            });
        };
        if without_replacement {
            working.clear_position(pos);
        }
        positions.push(pos);
    }
    for (pos, pin) in positions.iter_mut().zip(pins) {
        *pos = pin.apply(*pos);
    }
    Ok(positions)
}

/// Sample `count` levels uniformly from `min..=max` inclusive.
///
/// Standalone helper for callers that need per-entity level spreads
/// instead of the broadcast pair used by [`ForagingGenerator::generate`].
pub fn sample_levels(
    seed: u64,
    min: Level,
    max: Level,
    count: usize,
) -> Result<Vec<Level>, ConfigError> {
    if min.0 > max.0 {
        return Err(ConfigError::InvalidLevelRange {
            min: min.0,
            max: max.0,
        });
    }
    let mut rng = rng_from(seed);
    Ok((0..count)
        .map(|_| Level(rng.random_range(min.0..=max.0)))
        .collect())
}

/// Random layout generator for the foraging variant.
///
/// Ensures no two food items are adjacent, no food sits on the grid
/// border, and no agent starts on a food cell. Called once per episode
/// reset; the same seed reproduces the same layout bit-identically.
#[derive(Clone, Debug)]
pub struct ForagingGenerator {
    config: ForagingConfig,
}

impl ForagingGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: ForagingConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &ForagingConfig {
        &self.config
    }

    /// Sample food positions: interior cells only, no two adjacent.
    ///
    /// One child seed per item, drawn in order. Each draw picks uniformly
    /// among the remaining candidate cells, then clears the chosen cell
    /// and its orthogonal neighbours before the next draw, so the adjacency
    /// constraint holds by construction, not by rejection. Pinned-cell
    /// overrides are applied afterwards and are honored verbatim, even
    /// where they break the sampled constraints.
    pub fn sample_food(&self, seed: u64) -> Result<Vec<Position>, GenerationError> {
        let grid = self.config.grid();
        let num_food = self.config.num_food();
        let draw_seeds = split_seed_n(seed, num_food);
        let mut mask = CellMask::interior(grid);
        let mut positions = Vec::with_capacity(num_food);
        for (placed, &draw_seed) in draw_seeds.iter().enumerate() {
            let remaining = mask.count_set();
            if remaining == 0 {
                return Err(GenerationError::InsufficientSpace {
                    needed: num_food,
                    placed,
                });
            }
            let mut rng = rng_from(draw_seed);
            let k = rng.random_range(0..remaining);
            let Some(pos) = mask.nth_set_position(k) else {
                return Err(GenerationError::InsufficientSpace {
                    needed: num_food,
                    placed,
                });
            };
            mask.clear_around(pos);
            positions.push(pos);
        }
        for (pos, pin) in positions.iter_mut().zip(self.config.pinned_food()) {
            *pos = pin.apply(*pos);
        }
        Ok(positions)
    }

    /// Sample agent positions from the set cells of `mask`.
    ///
    /// Without replacement when `others_influence` is enabled (collision
    /// physics requires distinct starting cells); with replacement
    /// otherwise, since agents then pass through each other freely.
    pub fn sample_agents(
        &self,
        seed: u64,
        mask: &CellMask,
    ) -> Result<Vec<Position>, GenerationError> {
        sample_positions(
            seed,
            mask,
            self.config.num_agents(),
            self.config.others_influence(),
            self.config.pinned_agents(),
        )
    }

    /// Generate a full initial state for one episode.
    ///
    /// The seed splits into `[food, agents, levels, residual]`; the
    /// residual child is retained in the state for randomness needed after
    /// reset. Agents receive sequential ids `0..n-1` in sampling order.
    pub fn generate(&self, seed: u64) -> Result<State, GenerationError> {
        let [food_seed, agent_seed, level_seed, residual] = split_seed::<4>(seed);

        let food_positions = self.sample_food(food_seed)?;

        // Agents may land anywhere except a food cell.
        let mut mask = CellMask::filled(self.config.grid());
        for pos in &food_positions {
            mask.clear_position(*pos);
        }
        let agent_positions = self.sample_agents(agent_seed, &mask)?;

        let pair = draw_level_pair(level_seed, self.config.level_pairs());

        let agents = agent_positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| Agent::new(AgentId(i as u32), pos, pair.agent))
            .collect();
        let food = food_positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| Food::new(FoodId(i as u32), pos, pair.food))
            .collect();

        Ok(State::new(residual, agents, food))
    }
}

/// Draw one level pair uniformly from a non-empty table.
pub(crate) fn draw_level_pair(seed: u64, pairs: &[LevelPair]) -> LevelPair {
    let mut rng = rng_from(seed);
    pairs[rng.random_range(0..pairs.len())]
}
