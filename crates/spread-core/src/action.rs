//! The discrete per-agent action vocabulary.

use crate::error::ActionError;
use std::fmt;

/// Number of discrete actions available to every agent.
pub const ACTION_COUNT: usize = 5;

/// A single agent's move for one step.
///
/// The discriminants are the raw action indices accepted by
/// [`Action::try_from`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell down (row + 1).
    Down = 0,
    /// Move one cell left (col - 1).
    Left = 1,
    /// Move one cell up (row - 1).
    Up = 2,
    /// Move one cell right (col + 1).
    Right = 3,
    /// Stay in place.
    NoOp = 4,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Down,
        Action::Left,
        Action::Up,
        Action::Right,
        Action::NoOp,
    ];

    /// Returns the `(row_offset, col_offset)` for this action.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::NoOp => (0, 0),
        }
    }

    /// Human-readable name.
    pub fn meaning(self) -> &'static str {
        match self {
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Up => "UP",
            Action::Right => "RIGHT",
            Action::NoOp => "NOOP",
        }
    }

    /// The raw action index.
    pub fn index(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Action {
    type Error = ActionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ActionError::InvalidAction { value })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.meaning())
    }
}

/// Names of every action, in index order.
pub fn action_meanings() -> [&'static str; ACTION_COUNT] {
    Action::ALL.map(Action::meaning)
}
