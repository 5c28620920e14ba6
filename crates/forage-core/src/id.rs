//! Strongly-typed identifiers and the episode step counter.

use std::fmt;

/// Identifies an agent within an episode.
///
/// Agents are created at reset and assigned sequential ids; for an episode
/// with `n` agents the ids are exactly `0..n-1` in construction order and
/// stay stable for the episode lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a food item within an episode.
///
/// Same allocation rule as [`AgentId`]: sequential `0..n-1` at reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoodId(pub u32);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FoodId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing simulation step counter.
///
/// Starts at 0 when an episode state is generated and advances by one each
/// time the transition engine output is folded back into a state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepCount(pub u64);

impl StepCount {
    /// The counter after one more step.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepCount {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
