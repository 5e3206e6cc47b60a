//! The immutable set of target cells.

use crate::error::LayoutError;
use crate::shape::GridShape;
use indexmap::IndexSet;
use spread_core::Cell;

/// Target cells for an episode, one per agent, in agent order.
///
/// Arrival is collective: the team has arrived when the set of cells
/// occupied by all agents equals the goal set, in any permutation.
/// Agent `i` is not required to reach `goals[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalSet {
    cells: IndexSet<Cell>,
}

impl GoalSet {
    /// Build a goal set from `cells`, checking bounds and uniqueness.
    pub fn new(shape: GridShape, cells: impl IntoIterator<Item = Cell>) -> Result<Self, LayoutError> {
        let mut set = IndexSet::new();
        for cell in cells {
            shape.check(cell)?;
            if !set.insert(cell) {
                return Err(LayoutError::DuplicateGoal { cell });
            }
        }
        Ok(Self { cells: set })
    }

    /// The four corners, in the order `(0, cols-1)`, `(0, 0)`,
    /// `(rows-1, cols-1)`, `(rows-1, 0)`, truncated to `n`.
    ///
    /// Each default start cell sits on the opposite side of the centre
    /// from its corner.
    pub fn corners(shape: GridShape, n: usize) -> Result<Self, LayoutError> {
        let last_row = shape.rows() as i32 - 1;
        let last_col = shape.cols() as i32 - 1;
        let corners = [
            Cell::new(0, last_col),
            Cell::new(0, 0),
            Cell::new(last_row, last_col),
            Cell::new(last_row, 0),
        ];
        Self::new(shape, corners.into_iter().take(n))
    }

    /// Number of goal cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is a goal.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Goal cells in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of goal cells covered by at least one of `positions`.
    pub fn occupied_count(&self, positions: &[Cell]) -> usize {
        let occupied: IndexSet<Cell> = positions.iter().copied().collect();
        self.cells.iter().filter(|g| occupied.contains(*g)).count()
    }

    /// Whether the occupied-cell set of `positions` equals the goal set.
    pub fn is_covered_by(&self, positions: &[Cell]) -> bool {
        let occupied: IndexSet<Cell> = positions.iter().copied().collect();
        occupied.len() == self.cells.len() && self.cells.iter().all(|g| occupied.contains(g))
    }
}
