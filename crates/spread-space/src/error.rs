//! Error types for layout construction.

use spread_core::Cell;
use std::fmt;

/// Errors arising from grid or goal-set construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum representable size.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The value supplied.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// A cell lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The same goal cell was listed twice.
    DuplicateGoal {
        /// The repeated cell.
        cell: Cell,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellOutOfBounds { cell, bounds } => {
                write!(f, "cell {cell} out of bounds: {bounds}")
            }
            Self::DuplicateGoal { cell } => write!(f, "goal cell {cell} listed twice"),
        }
    }
}

impl std::error::Error for LayoutError {}
