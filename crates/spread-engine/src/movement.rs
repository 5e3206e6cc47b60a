//! Move validation and collision resolution.
//!
//! [`MovementResolver`] borrows the occupancy grid and the position table
//! mutably for the duration of a move, so the two can only be changed
//! together and no other reader can see them disagree.

use spread_core::{Action, AgentId, Cell, CellMarker, EnvError};
use spread_space::OccupancyGrid;
use tracing::trace;

use crate::positions::AgentPositionTable;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// The candidate cell is off the grid.
    OutOfBounds,
    /// The candidate cell is a wall.
    Wall,
    /// The candidate cell holds another agent.
    Occupied {
        /// The agent already standing there.
        by: AgentId,
    },
}

/// Result of a single [`MovementResolver::attempt_move`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent moved.
    Moved {
        /// Cell before the move.
        from: Cell,
        /// Cell after the move.
        to: Cell,
    },
    /// A no-op: the agent stays where it is.
    Stayed,
    /// The move was refused; agent and grid are unchanged.
    Blocked(BlockReason),
    /// The agent was already done and was not offered a move.
    Skipped,
}

impl MoveOutcome {
    /// Whether the action was accepted. No-ops count as accepted.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Moved { .. } | Self::Stayed)
    }
}

/// Applies one agent's action to the grid and position table.
pub struct MovementResolver<'a> {
    grid: &'a mut OccupancyGrid,
    positions: &'a mut AgentPositionTable,
}

impl<'a> MovementResolver<'a> {
    /// Borrow the grid and table for a batch of moves.
    pub fn new(grid: &'a mut OccupancyGrid, positions: &'a mut AgentPositionTable) -> Self {
        Self { grid, positions }
    }

    /// Try to move `agent` one cell in the direction of `action`.
    ///
    /// The move is refused when the candidate cell is off the grid, a
    /// wall, or occupied by another agent. A refusal is not an error: the
    /// agent simply stays put and nothing changes. Agents that already
    /// moved this step are seen at their new cells, so resolution order
    /// is the order of calls.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::UnknownAgent`] if `agent` is not in the table.
    pub fn attempt_move(&mut self, agent: AgentId, action: Action) -> Result<MoveOutcome, EnvError> {
        let from = self.positions.get(agent)?;
        if action == Action::NoOp {
            return Ok(MoveOutcome::Stayed);
        }
        let to = from.offset(action.offset());

        if let Some(reason) = self.blocker(agent, to) {
            trace!(%agent, %action, %from, %to, ?reason, "move blocked");
            return Ok(MoveOutcome::Blocked(reason));
        }

        self.grid.vacate(from);
        self.grid.stamp(to, agent);
        self.positions.set(agent, to)?;
        Ok(MoveOutcome::Moved { from, to })
    }

    /// The position table as updated by the moves resolved so far.
    pub fn positions(&self) -> &AgentPositionTable {
        self.positions
    }

    fn blocker(&self, agent: AgentId, to: Cell) -> Option<BlockReason> {
        match self.grid.marker(to) {
            None => Some(BlockReason::OutOfBounds),
            Some(CellMarker::Wall) => Some(BlockReason::Wall),
            Some(CellMarker::Agent(by)) if by != agent => Some(BlockReason::Occupied { by }),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spread_space::{GridShape, Layout};

    fn setup(starts: &[Cell]) -> (OccupancyGrid, AgentPositionTable) {
        let mut grid = OccupancyGrid::new(Layout::build(GridShape::new(6, 6).unwrap()));
        for (i, &cell) in starts.iter().enumerate() {
            grid.stamp(cell, AgentId(i as u16));
        }
        (grid, AgentPositionTable::new(starts.to_vec()))
    }

    #[test]
    fn each_direction_moves_one_cell() {
        let cases = [
            (Action::Down, Cell::new(4, 1)),
            (Action::Left, Cell::new(3, 0)),
            (Action::Up, Cell::new(2, 1)),
            (Action::Right, Cell::new(3, 2)),
        ];
        for (action, expected) in cases {
            let (mut grid, mut positions) = setup(&[Cell::new(3, 1)]);
            let outcome = MovementResolver::new(&mut grid, &mut positions)
                .attempt_move(AgentId(0), action)
                .unwrap();
            assert_eq!(
                outcome,
                MoveOutcome::Moved {
                    from: Cell::new(3, 1),
                    to: expected
                },
                "{action}"
            );
            assert_eq!(positions.get(AgentId(0)).unwrap(), expected);
            assert_eq!(grid.occupant(expected), Some(AgentId(0)));
            assert!(grid.is_vacant(Cell::new(3, 1)));
        }
    }

    #[test]
    fn noop_is_accepted_without_moving() {
        let (mut grid, mut positions) = setup(&[Cell::new(3, 3)]);
        let before = grid.clone();
        let outcome = MovementResolver::new(&mut grid, &mut positions)
            .attempt_move(AgentId(0), Action::NoOp)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Stayed);
        assert!(outcome.is_accepted());
        assert_eq!(grid, before);
    }

    #[test]
    fn boundary_blocks_movement() {
        let (mut grid, mut positions) = setup(&[Cell::new(0, 0)]);
        let before = grid.clone();
        let mut resolver = MovementResolver::new(&mut grid, &mut positions);
        for action in [Action::Up, Action::Left] {
            let outcome = resolver.attempt_move(AgentId(0), action).unwrap();
            assert_eq!(outcome, MoveOutcome::Blocked(BlockReason::OutOfBounds));
            assert!(!outcome.is_accepted());
        }
        assert_eq!(grid, before);
        assert_eq!(positions.get(AgentId(0)).unwrap(), Cell::new(0, 0));
    }

    #[test]
    fn wall_blocks_movement() {
        // (3,2) is on the band; (2,2) above it is a wall.
        let (mut grid, mut positions) = setup(&[Cell::new(3, 2)]);
        let outcome = MovementResolver::new(&mut grid, &mut positions)
            .attempt_move(AgentId(0), Action::Up)
            .unwrap();
        assert_eq!(outcome, MoveOutcome::Blocked(BlockReason::Wall));
        assert_eq!(positions.get(AgentId(0)).unwrap(), Cell::new(3, 2));
    }

    #[test]
    fn collision_blocks_movement() {
        let (mut grid, mut positions) = setup(&[Cell::new(3, 3), Cell::new(3, 4)]);
        let outcome = MovementResolver::new(&mut grid, &mut positions)
            .attempt_move(AgentId(0), Action::Right)
            .unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Blocked(BlockReason::Occupied { by: AgentId(1) })
        );
        assert_eq!(grid.occupant(Cell::new(3, 3)), Some(AgentId(0)));
        assert_eq!(grid.occupant(Cell::new(3, 4)), Some(AgentId(1)));
    }

    #[test]
    fn leaving_a_start_wall_restores_it() {
        // (2,3) is a wall in the 6x6 layout but a default start cell.
        let (mut grid, mut positions) = setup(&[Cell::new(2, 3)]);
        let outcome = MovementResolver::new(&mut grid, &mut positions)
            .attempt_move(AgentId(0), Action::Right)
            .unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(grid.marker(Cell::new(2, 3)), Some(CellMarker::Wall));
    }

    #[test]
    fn unknown_agent_is_an_error() {
        let (mut grid, mut positions) = setup(&[Cell::new(3, 3)]);
        let err = MovementResolver::new(&mut grid, &mut positions)
            .attempt_move(AgentId(3), Action::Down)
            .unwrap_err();
        assert!(matches!(err, EnvError::UnknownAgent { .. }));
    }
}
