//! Agents, food items, and the shared [`Entity`] capability.

use crate::id::{AgentId, FoodId};
use crate::level::Level;
use crate::position::Position;

/// Anything that occupies a cell and carries a level.
///
/// The geometric predicates in the grid crate are written against this
/// trait so they apply uniformly to agents and food.
pub trait Entity {
    /// The cell the entity currently occupies.
    fn position(&self) -> Position;
    /// The entity's level.
    fn level(&self) -> Level;
}

/// An agent on the grid.
///
/// Created once per episode at reset; its position and loading flag change
/// every step through the copy-and-modify constructors, its id and level
/// never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    position: Position,
    level: Level,
    loading: bool,
}

impl Agent {
    /// Construct an agent with `loading` cleared.
    pub fn new(id: AgentId, position: Position, level: Level) -> Self {
        Self {
            id,
            position,
            level,
            loading: false,
        }
    }

    /// Stable per-episode identifier.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// True iff the agent chose the load action this step.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A copy of this agent at a new position.
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..*self
        }
    }

    /// A copy of this agent with the loading flag set or cleared.
    pub fn with_loading(&self, loading: bool) -> Self {
        Self {
            loading,
            ..*self
        }
    }
}

impl Entity for Agent {
    fn position(&self) -> Position {
        self.position
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// A food item on the grid.
///
/// Position and level are fixed at placement; `eaten` is monotonic and can
/// only flip false to true via [`Food::consumed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    id: FoodId,
    position: Position,
    level: Level,
    eaten: bool,
}

impl Food {
    /// Construct an uneaten food item.
    pub fn new(id: FoodId, position: Position, level: Level) -> Self {
        Self {
            id,
            position,
            level,
            eaten: false,
        }
    }

    /// Stable per-episode identifier.
    pub fn id(&self) -> FoodId {
        self.id
    }

    /// True once the item has been collected.
    pub fn is_eaten(&self) -> bool {
        self.eaten
    }

    /// A copy of this item marked as eaten.
    pub fn consumed(&self) -> Self {
        Self {
            eaten: true,
            ..*self
        }
    }
}

impl Entity for Food {
    fn position(&self) -> Position {
        self.position
    }

    fn level(&self) -> Level {
        self.level
    }
}
