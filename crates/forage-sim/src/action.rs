//! The fixed discrete action table and per-agent legal-action masks.

use crate::error::StepError;
use std::fmt;

/// One of the six discrete agent actions.
///
/// The numeric values and the displacement table are a wire-level contract
/// with the surrounding RL framework and must not be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Stay in place.
    NoOp = 0,
    /// Move one cell up (row - 1).
    Up = 1,
    /// Move one cell down (row + 1).
    Down = 2,
    /// Move one cell left (col - 1).
    Left = 3,
    /// Move one cell right (col + 1).
    Right = 4,
    /// Stay in place and attempt to collect an adjacent food item.
    Load = 5,
}

impl Action {
    /// Number of actions in the table.
    pub const COUNT: usize = 6;

    /// All actions in table order.
    pub const ALL: [Action; Self::COUNT] = [
        Action::NoOp,
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Load,
    ];

    /// The `(drow, dcol)` displacement of this action.
    ///
    /// `NoOp` and `Load` are zero-displacement.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::NoOp | Action::Load => (0, 0),
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Position of this action in the table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Decode a raw action value from the RL boundary.
    ///
    /// Returns `Err(StepError::InvalidActionIndex)` for values outside the
    /// table.
    pub fn from_index(index: u32) -> Result<Self, StepError> {
        match index {
            0 => Ok(Action::NoOp),
            1 => Ok(Action::Up),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            4 => Ok(Action::Right),
            5 => Ok(Action::Load),
            _ => Err(StepError::InvalidActionIndex { index }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::NoOp => "noop",
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Load => "load",
        };
        write!(f, "{name}")
    }
}

/// Boolean legality vector aligned with the action table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionMask([bool; Action::COUNT]);

impl ActionMask {
    /// Build a mask from a table-ordered legality array.
    pub fn new(legal: [bool; Action::COUNT]) -> Self {
        Self(legal)
    }

    /// True iff `action` is legal under this mask.
    pub fn is_legal(self, action: Action) -> bool {
        self.0[action.index()]
    }

    /// The table-ordered legality array.
    pub fn as_array(self) -> [bool; Action::COUNT] {
        self.0
    }

    /// All legal actions, in table order.
    pub fn legal_actions(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| self.0[a.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_roundtrip_through_the_table() {
        for action in Action::ALL {
            assert_eq!(Action::from_index(action.index() as u32), Ok(action));
        }
    }

    #[test]
    fn out_of_table_index_is_rejected() {
        assert_eq!(
            Action::from_index(6),
            Err(StepError::InvalidActionIndex { index: 6 })
        );
        assert_eq!(
            Action::from_index(u32::MAX),
            Err(StepError::InvalidActionIndex { index: u32::MAX })
        );
    }

    #[test]
    fn deltas_match_table() {
        assert_eq!(Action::NoOp.delta(), (0, 0));
        assert_eq!(Action::Up.delta(), (-1, 0));
        assert_eq!(Action::Down.delta(), (1, 0));
        assert_eq!(Action::Left.delta(), (0, -1));
        assert_eq!(Action::Right.delta(), (0, 1));
        assert_eq!(Action::Load.delta(), (0, 0));
    }

    #[test]
    fn mask_filters_legal_actions() {
        let mask = ActionMask::new([true, false, true, false, false, true]);
        assert!(mask.is_legal(Action::NoOp));
        assert!(!mask.is_legal(Action::Up));
        let legal: Vec<Action> = mask.legal_actions().collect();
        assert_eq!(legal, vec![Action::NoOp, Action::Down, Action::Load]);
    }
}
