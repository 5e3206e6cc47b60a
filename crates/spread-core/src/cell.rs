//! Grid cells and the per-cell content tag.

use crate::id::AgentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, col)` position on the grid.
///
/// Signed so that a candidate cell one step past the boundary can be
/// represented and rejected by bounds checks instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing to the right.
    pub col: i32,
}

impl Cell {
    /// Construct a cell from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(dr, dc)`.
    pub fn offset(self, (dr, dc): (i32, i32)) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Content of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellMarker {
    /// Walkable and unoccupied.
    Empty,
    /// Not walkable.
    Wall,
    /// Occupied by the given agent.
    Agent(AgentId),
}

impl CellMarker {
    /// Numeric code for dense grid exports: `0` empty, `-1` wall,
    /// `k + 1` for agent `k`.
    pub fn code(self) -> i32 {
        match self {
            Self::Empty => 0,
            Self::Wall => -1,
            Self::Agent(id) => id.marker_code(),
        }
    }

    /// Inverse of [`code`](Self::code). Returns `None` for codes below `-1`
    /// or agent codes that do not fit an [`AgentId`].
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            -1 => Some(Self::Wall),
            k if k > 0 => u16::try_from(k - 1).ok().map(|id| Self::Agent(AgentId(id))),
            _ => None,
        }
    }

    /// Whether this cell can be stepped on by an agent.
    pub fn is_vacant(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The occupying agent, if any.
    pub fn occupant(self) -> Option<AgentId> {
        match self {
            Self::Agent(id) => Some(id),
            _ => None,
        }
    }
}
