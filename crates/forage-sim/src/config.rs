//! Static generator configuration, validated eagerly at build time.

use crate::error::ConfigError;
use forage_core::{LevelPair, Position};
use forage_grid::Grid;

/// Minimum supported side length for the foraging grid.
///
/// Smaller grids have too few interior cells to satisfy the food
/// non-adjacency constraint for any useful episode.
pub const MIN_FORAGING_GRID: u32 = 5;

/// A per-axis placement override for one agent or food item.
///
/// Replaces the `-1` sentinel convention: after sampling, each pinned axis
/// overrides the sampled coordinate on that axis independently, so an entry
/// may pin the row, the column, both, or neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinnedCell {
    /// Pinned row, or `None` to keep the sampled row.
    pub row: Option<i32>,
    /// Pinned column, or `None` to keep the sampled column.
    pub col: Option<i32>,
}

impl PinnedCell {
    /// An entry that pins neither axis.
    pub fn free() -> Self {
        Self::default()
    }

    /// An entry that pins both axes.
    pub fn at(row: i32, col: i32) -> Self {
        Self {
            row: Some(row),
            col: Some(col),
        }
    }

    /// True iff both axes are pinned.
    pub fn is_full(self) -> bool {
        self.row.is_some() && self.col.is_some()
    }

    /// Override a sampled position axis-by-axis.
    ///
    /// Each pinned axis replaces the sampled coordinate on that axis; free
    /// axes keep the sample.
    pub fn apply(self, sampled: Position) -> Position {
        Position::new(
            self.row.unwrap_or(sampled.row),
            self.col.unwrap_or(sampled.col),
        )
    }
}

fn validate_pins(
    pins: Vec<PinnedCell>,
    kind: &'static str,
    count: usize,
    grid: Grid,
) -> Result<Vec<PinnedCell>, ConfigError> {
    let pins = if pins.is_empty() {
        vec![PinnedCell::free(); count]
    } else {
        pins
    };
    if pins.len() != count {
        return Err(ConfigError::PinnedCountMismatch {
            kind,
            expected: count,
            got: pins.len(),
        });
    }
    for (index, pin) in pins.iter().enumerate() {
        let row_ok = pin.row.is_none_or(|r| r >= 0 && r < grid.rows() as i32);
        let col_ok = pin.col.is_none_or(|c| c >= 0 && c < grid.cols() as i32);
        if !row_ok || !col_ok {
            return Err(ConfigError::PinnedOutOfBounds { kind, index });
        }
    }
    Ok(pins)
}

/// Validated configuration for the foraging (food-bearing) variant.
///
/// Built through [`ForagingConfig::builder`]; construction is the only
/// place invalid parameters can be rejected, so everything downstream of a
/// built config can trust it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForagingConfig {
    grid: Grid,
    num_agents: usize,
    num_food: usize,
    fov: u32,
    level_pairs: Vec<LevelPair>,
    pinned_agents: Vec<PinnedCell>,
    pinned_food: Vec<PinnedCell>,
    others_influence: bool,
    force_coop: bool,
}

impl ForagingConfig {
    /// Start building a configuration.
    pub fn builder() -> ForagingConfigBuilder {
        ForagingConfigBuilder {
            grid_size: 0,
            num_agents: 0,
            num_food: 0,
            fov: None,
            level_pairs: Vec::new(),
            pinned_agents: Vec::new(),
            pinned_food: Vec::new(),
            others_influence: false,
            force_coop: false,
        }
    }

    /// The square grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of agents per episode.
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Number of food items per episode.
    pub fn num_food(&self) -> usize {
        self.num_food
    }

    /// Agent field of view (carried for the observation layer, not
    /// exercised by generation or movement).
    pub fn fov(&self) -> u32 {
        self.fov
    }

    /// The allowed (agent level, food level) pairs.
    pub fn level_pairs(&self) -> &[LevelPair] {
        &self.level_pairs
    }

    /// Per-agent placement overrides, count-length.
    pub fn pinned_agents(&self) -> &[PinnedCell] {
        &self.pinned_agents
    }

    /// Per-food placement overrides, count-length.
    pub fn pinned_food(&self) -> &[PinnedCell] {
        &self.pinned_food
    }

    /// Whether agents block and collide with each other.
    pub fn others_influence(&self) -> bool {
        self.others_influence
    }

    /// Whether cooperative collection is forced (consumed by the reward
    /// layer, carried here).
    pub fn force_coop(&self) -> bool {
        self.force_coop
    }
}

/// Builder for [`ForagingConfig`].
///
/// Required: `grid_size`, `num_agents`, `num_food`, `level_pairs`.
#[derive(Clone, Debug)]
pub struct ForagingConfigBuilder {
    grid_size: u32,
    num_agents: usize,
    num_food: usize,
    fov: Option<u32>,
    level_pairs: Vec<LevelPair>,
    pinned_agents: Vec<PinnedCell>,
    pinned_food: Vec<PinnedCell>,
    others_influence: bool,
    force_coop: bool,
}

impl ForagingConfigBuilder {
    /// Set the square grid side length (minimum [`MIN_FORAGING_GRID`]).
    pub fn grid_size(mut self, size: u32) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the number of agents.
    pub fn num_agents(mut self, n: usize) -> Self {
        self.num_agents = n;
        self
    }

    /// Set the number of food items.
    pub fn num_food(mut self, n: usize) -> Self {
        self.num_food = n;
        self
    }

    /// Set the field of view (default: grid size).
    pub fn fov(mut self, fov: u32) -> Self {
        self.fov = Some(fov);
        self
    }

    /// Set the allowed level pairs.
    pub fn level_pairs(mut self, pairs: Vec<LevelPair>) -> Self {
        self.level_pairs = pairs;
        self
    }

    /// Pin agent placements (empty = none; otherwise one entry per agent).
    pub fn pinned_agents(mut self, pins: Vec<PinnedCell>) -> Self {
        self.pinned_agents = pins;
        self
    }

    /// Pin food placements (empty = none; otherwise one entry per item).
    pub fn pinned_food(mut self, pins: Vec<PinnedCell>) -> Self {
        self.pinned_food = pins;
        self
    }

    /// Enable or disable agent-to-agent collision physics (default: off).
    pub fn others_influence(mut self, enabled: bool) -> Self {
        self.others_influence = enabled;
        self
    }

    /// Force cooperative collection (default: off).
    pub fn force_coop(mut self, enabled: bool) -> Self {
        self.force_coop = enabled;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ForagingConfig, ConfigError> {
        if self.grid_size < MIN_FORAGING_GRID {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_FORAGING_GRID,
            });
        }
        let grid = Grid::square(self.grid_size)?;
        let fov = self.fov.unwrap_or(self.grid_size);
        if fov < 1 || fov > self.grid_size {
            return Err(ConfigError::FovOutOfRange {
                fov,
                max: self.grid_size,
            });
        }
        if self.num_agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        if self.num_food == 0 {
            return Err(ConfigError::NoFood);
        }
        if self.level_pairs.is_empty() {
            return Err(ConfigError::NoLevelPairs);
        }
        let pinned_agents = validate_pins(self.pinned_agents, "agents", self.num_agents, grid)?;
        let pinned_food = validate_pins(self.pinned_food, "food", self.num_food, grid)?;
        Ok(ForagingConfig {
            grid,
            num_agents: self.num_agents,
            num_food: self.num_food,
            fov,
            level_pairs: self.level_pairs,
            pinned_agents,
            pinned_food,
            others_influence: self.others_influence,
            force_coop: self.force_coop,
        })
    }
}

/// Validated configuration for the open-field (no food) variant.
///
/// Structurally parallel to [`ForagingConfig`] but rectangular and without
/// food parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenFieldConfig {
    grid: Grid,
    num_agents: usize,
    fov: u32,
    level_pairs: Vec<LevelPair>,
    pinned_agents: Vec<PinnedCell>,
    others_influence: bool,
    force_coop: bool,
}

impl OpenFieldConfig {
    /// Start building a configuration.
    pub fn builder() -> OpenFieldConfigBuilder {
        OpenFieldConfigBuilder {
            rows: 0,
            cols: 0,
            num_agents: 0,
            fov: None,
            level_pairs: Vec::new(),
            pinned_agents: Vec::new(),
            others_influence: false,
            force_coop: false,
        }
    }

    /// The rectangular grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of agents per episode.
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Agent field of view (carried, not exercised here).
    pub fn fov(&self) -> u32 {
        self.fov
    }

    /// The allowed (agent level, food level) pairs; only the agent level is
    /// used in this variant.
    pub fn level_pairs(&self) -> &[LevelPair] {
        &self.level_pairs
    }

    /// Per-agent placement overrides, count-length.
    pub fn pinned_agents(&self) -> &[PinnedCell] {
        &self.pinned_agents
    }

    /// Whether agents block and collide with each other.
    pub fn others_influence(&self) -> bool {
        self.others_influence
    }

    /// Whether cooperative collection is forced (carried).
    pub fn force_coop(&self) -> bool {
        self.force_coop
    }
}

/// Builder for [`OpenFieldConfig`].
///
/// Required: `rows`, `cols`, `num_agents`, `level_pairs`.
#[derive(Clone, Debug)]
pub struct OpenFieldConfigBuilder {
    rows: u32,
    cols: u32,
    num_agents: usize,
    fov: Option<u32>,
    level_pairs: Vec<LevelPair>,
    pinned_agents: Vec<PinnedCell>,
    others_influence: bool,
    force_coop: bool,
}

impl OpenFieldConfigBuilder {
    /// Set the grid dimensions.
    pub fn grid(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the number of agents.
    pub fn num_agents(mut self, n: usize) -> Self {
        self.num_agents = n;
        self
    }

    /// Set the field of view (default: the larger grid dimension).
    pub fn fov(mut self, fov: u32) -> Self {
        self.fov = Some(fov);
        self
    }

    /// Set the allowed level pairs.
    pub fn level_pairs(mut self, pairs: Vec<LevelPair>) -> Self {
        self.level_pairs = pairs;
        self
    }

    /// Pin agent placements (empty = none; otherwise one entry per agent).
    pub fn pinned_agents(mut self, pins: Vec<PinnedCell>) -> Self {
        self.pinned_agents = pins;
        self
    }

    /// Enable or disable agent-to-agent collision physics (default: off).
    pub fn others_influence(mut self, enabled: bool) -> Self {
        self.others_influence = enabled;
        self
    }

    /// Force cooperative collection (default: off).
    pub fn force_coop(mut self, enabled: bool) -> Self {
        self.force_coop = enabled;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<OpenFieldConfig, ConfigError> {
        let grid = Grid::new(self.rows, self.cols)?;
        let max_fov = self.rows.max(self.cols);
        let fov = self.fov.unwrap_or(max_fov);
        if fov < 1 || fov > max_fov {
            return Err(ConfigError::FovOutOfRange { fov, max: max_fov });
        }
        if self.num_agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        if self.level_pairs.is_empty() {
            return Err(ConfigError::NoLevelPairs);
        }
        let pinned_agents = validate_pins(self.pinned_agents, "agents", self.num_agents, grid)?;
        Ok(OpenFieldConfig {
            grid,
            num_agents: self.num_agents,
            fov,
            level_pairs: self.level_pairs,
            pinned_agents,
            others_influence: self.others_influence,
            force_coop: self.force_coop,
        })
    }
}
