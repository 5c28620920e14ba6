//! Entity levels and the allowed (agent, food) level pairing.

use std::fmt;

/// Strength of an agent, or required collecting strength of a food item.
///
/// A food item can be collected when the combined level of the loading
/// agents adjacent to it reaches the food's level; that reward logic lives
/// outside this core, which only samples and carries the values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(pub u32);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Level {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// One allowed combination of agent level and food level.
///
/// Generation draws a single pair uniformly from the configured table and
/// broadcasts it: within one episode every agent shares the pair's agent
/// level and every food item shares its food level. Variety across episodes
/// comes from re-sampling at reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelPair {
    /// Level broadcast to every agent in the episode.
    pub agent: Level,
    /// Level broadcast to every food item in the episode.
    pub food: Level,
}

impl LevelPair {
    /// Convenience constructor from raw values.
    pub fn new(agent: u32, food: u32) -> Self {
        Self {
            agent: Level(agent),
            food: Level(food),
        }
    }
}
