//! Per-step reward assignment.
//!
//! Two schemes, chosen at construction:
//!
//! - [`RewardMode::Positional`]: a shared team signal. After all moves,
//!   every agent (done or not) receives `occupied_goals × reach_reward`.
//!   The step cost is overwritten, not added to.
//! - [`RewardMode::Sparse`]: individual. Every agent pays the step cost;
//!   an agent additionally earns `reach_reward` once per episode, on the
//!   first step it is found on any goal cell.

use spread_core::Cell;
use spread_space::GoalSet;

use crate::config::RewardMode;

/// Reward parameters fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardModel {
    mode: RewardMode,
    step_cost: f32,
    reach_reward: f32,
}

impl RewardModel {
    /// Create a reward model.
    pub fn new(mode: RewardMode, step_cost: f32, reach_reward: f32) -> Self {
        Self {
            mode,
            step_cost,
            reach_reward,
        }
    }

    /// The configured scheme.
    pub fn mode(&self) -> RewardMode {
        self.mode
    }

    /// Per-step cost applied to every agent before movement.
    pub fn step_cost(&self) -> f32 {
        self.step_cost
    }

    /// Bonus magnitude for goal occupancy.
    pub fn reach_reward(&self) -> f32 {
        self.reach_reward
    }

    /// Default rewards for a step: the step cost for every agent.
    pub fn base_rewards(&self, n_agents: usize) -> Vec<f32> {
        vec![self.step_cost; n_agents]
    }

    /// Team reward for the current positions: number of goal cells
    /// occupied by some agent, times `reach_reward`.
    pub fn team_reward(&self, goals: &GoalSet, positions: &[Cell]) -> f32 {
        goals.occupied_count(positions) as f32 * self.reach_reward
    }

    /// Sparse-mode bonus for an agent standing on `cell`, given whether it
    /// has already claimed its bonus this episode. Returns the bonus and
    /// the updated claim flag.
    pub fn sparse_bonus(&self, goals: &GoalSet, cell: Cell, claimed: bool) -> (f32, bool) {
        if !claimed && goals.contains(cell) {
            (self.reach_reward, true)
        } else {
            (0.0, claimed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spread_space::GridShape;

    fn goals() -> GoalSet {
        GoalSet::corners(GridShape::new(6, 6).unwrap(), 4).unwrap()
    }

    #[test]
    fn base_rewards_are_step_cost() {
        let m = RewardModel::new(RewardMode::Positional, -1.0, 1.0);
        assert_eq!(m.base_rewards(3), vec![-1.0; 3]);
    }

    #[test]
    fn team_reward_counts_occupied_goals() {
        let m = RewardModel::new(RewardMode::Positional, -1.0, 2.5);
        let positions = [
            Cell::new(0, 0),
            Cell::new(5, 5),
            Cell::new(3, 3),
            Cell::new(3, 2),
        ];
        assert_eq!(m.team_reward(&goals(), &positions), 5.0);
        assert_eq!(m.team_reward(&goals(), &[Cell::new(3, 3)]), 0.0);
    }

    #[test]
    fn sparse_bonus_is_one_time() {
        let m = RewardModel::new(RewardMode::Sparse, -1.0, 1.0);
        let g = goals();
        let (bonus, claimed) = m.sparse_bonus(&g, Cell::new(0, 0), false);
        assert_eq!((bonus, claimed), (1.0, true));
        let (bonus, claimed) = m.sparse_bonus(&g, Cell::new(0, 0), claimed);
        assert_eq!((bonus, claimed), (0.0, true));
    }

    #[test]
    fn sparse_bonus_requires_goal_cell() {
        let m = RewardModel::new(RewardMode::Sparse, -1.0, 1.0);
        assert_eq!(m.sparse_bonus(&goals(), Cell::new(3, 3), false), (0.0, false));
    }
}
