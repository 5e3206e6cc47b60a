//! Per-step counters for the episode controller.
//!
//! [`StepMetrics`] captures timing and move-resolution counts for a
//! single step so callers can profile or audit an episode without
//! re-deriving outcomes from positions.

use crate::movement::{BlockReason, MoveOutcome};

/// Timing and movement counters collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Agents that changed cell.
    pub moves_applied: u32,
    /// Agents that chose the no-op action.
    pub noops: u32,
    /// Moves refused because the target was off the grid.
    pub blocked_out_of_bounds: u32,
    /// Moves refused because the target was a wall.
    pub blocked_wall: u32,
    /// Moves refused because the target held another agent.
    pub blocked_occupied: u32,
    /// Agents not offered a move because they were already done.
    pub skipped_done: u32,
}

impl StepMetrics {
    /// Tally one move outcome.
    pub fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved { .. } => self.moves_applied += 1,
            MoveOutcome::Stayed => self.noops += 1,
            MoveOutcome::Blocked(BlockReason::OutOfBounds) => self.blocked_out_of_bounds += 1,
            MoveOutcome::Blocked(BlockReason::Wall) => self.blocked_wall += 1,
            MoveOutcome::Blocked(BlockReason::Occupied { .. }) => self.blocked_occupied += 1,
            MoveOutcome::Skipped => self.skipped_done += 1,
        }
    }

    /// Total refused moves.
    pub fn blocked(&self) -> u32 {
        self.blocked_out_of_bounds + self.blocked_wall + self.blocked_occupied
    }
}
