//! The episode controller.
//!
//! [`SpreadEnv`] is the primary user-facing API. It owns the occupancy
//! grid and the agent position table exclusively; the only path that
//! mutates them is [`step()`](SpreadEnv::step) (through a
//! [`MovementResolver`]) and [`reset()`](SpreadEnv::reset).
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --reset--> Ready --step--> Stepping --(all done | ceiling)--> Terminal
//!       ^                                                                        |
//!       +------------------------------- reset ---------------------------------+
//! ```
//!
//! Stepping a terminal episode is allowed: done agents never move, but
//! the step counter and cumulative rewards keep advancing. Every agent
//! is charged the step cost in either reward mode; no goal reward is
//! paid once the episode is over.

use std::time::Instant;

use spread_core::{
    Action, AgentId, Cell, EnvError, Environment, Observation, StepId, Transition,
};
use spread_space::{GoalSet, GridShape, Layout, OccupancyGrid};
use tracing::{debug, info};

use crate::config::{ConfigError, EnvConfig, RewardMode};
use crate::metrics::StepMetrics;
use crate::movement::{MoveOutcome, MovementResolver};
use crate::observation::{self, ActionSpace, ObservationBounds};
use crate::positions::AgentPositionTable;
use crate::render::RenderFrame;
use crate::reward::RewardModel;
use crate::seeding::{self, EnvRng};

// Compile-time assertion: SpreadEnv can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SpreadEnv>();
    }
};

// ── EpisodePhase ────────────────────────────────────────────────

/// Where the episode is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Constructed but never reset; `step()` is refused.
    Uninitialized,
    /// Reset, no steps taken yet.
    Ready,
    /// At least one step taken and not every agent is done.
    Stepping,
    /// Every agent is done.
    Terminal,
}

// ── StepInfo ────────────────────────────────────────────────────

/// Auxiliary information returned with every step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepInfo {
    /// Step counter after this step.
    pub step: StepId,
    /// Lifecycle phase after this step.
    pub phase: EpisodePhase,
    /// What happened to each agent's action, in agent order.
    pub outcomes: Vec<MoveOutcome>,
    /// Counters for this step.
    pub metrics: StepMetrics,
}

/// Result of a successful [`SpreadEnv::step()`] call.
pub type StepResult = Transition<Observation, StepInfo>;

// ── SpreadEnv ───────────────────────────────────────────────────

/// Multi-agent grid-world episode.
///
/// Created from an [`EnvConfig`] via [`new()`](SpreadEnv::new). Call
/// [`reset()`](SpreadEnv::reset) before the first
/// [`step()`](SpreadEnv::step).
///
/// # Example
///
/// ```
/// use spread_core::Action;
/// use spread_engine::{EnvConfig, SpreadEnv};
///
/// let mut env = SpreadEnv::new(EnvConfig::default()).unwrap();
/// let obs = env.reset();
/// assert_eq!(obs.len(), 4);
///
/// let result = env.step(&[Action::Right, Action::Right, Action::Left, Action::Left]).unwrap();
/// assert_eq!(result.rewards.len(), 4);
/// assert!(!result.all_done());
/// ```
pub struct SpreadEnv {
    config: EnvConfig,
    layout: Layout,
    start_cells: Vec<Cell>,
    goals: GoalSet,
    rewards: RewardModel,
    grid: OccupancyGrid,
    positions: AgentPositionTable,
    dones: Vec<bool>,
    bonus_claimed: Vec<bool>,
    total_rewards: Vec<f32>,
    step: StepId,
    phase: EpisodePhase,
    seed: u64,
    rng: EnvRng,
    last_metrics: StepMetrics,
}

impl SpreadEnv {
    /// Create a new environment from an [`EnvConfig`].
    ///
    /// Validates the configuration and derives the layout, start cells,
    /// and goal set. The episode starts [`Uninitialized`](EpisodePhase::Uninitialized).
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        let resolved = config.resolve()?;
        let n = resolved.start_cells.len();
        let mut grid = OccupancyGrid::new(resolved.layout.clone());
        stamp_all(&mut grid, &resolved.start_cells);
        Ok(Self {
            rewards: RewardModel::new(config.reward_mode, config.step_cost, config.reach_reward),
            layout: resolved.layout,
            goals: resolved.goals,
            positions: AgentPositionTable::new(resolved.start_cells.clone()),
            start_cells: resolved.start_cells,
            grid,
            dones: vec![false; n],
            bonus_claimed: vec![false; n],
            total_rewards: vec![0.0; n],
            step: StepId(0),
            phase: EpisodePhase::Uninitialized,
            seed: 0,
            rng: seeding::rng_from_seed(0),
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    /// Start a new episode.
    ///
    /// Rebuilds the grid from the layout, re-stamps the start cells, and
    /// zeroes the step counter, done flags, and cumulative rewards.
    /// Returns the initial observations.
    pub fn reset(&mut self) -> Vec<Observation> {
        self.grid = OccupancyGrid::new(Layout::build(self.layout.shape()));
        stamp_all(&mut self.grid, &self.start_cells);
        self.positions.restore(&self.start_cells);
        self.step = StepId(0);
        self.dones.fill(false);
        self.bonus_claimed.fill(false);
        self.total_rewards.fill(0.0);
        self.last_metrics = StepMetrics::default();
        self.phase = EpisodePhase::Ready;
        debug!(n_agents = self.n_agents(), seed = self.seed, "episode reset");
        self.observations()
    }

    /// Advance the episode by one step.
    ///
    /// `actions[i]` is agent `i`'s action. Moves are resolved in agent
    /// order; agents already done stay put. Returns observations, rewards,
    /// done flags, and [`StepInfo`].
    ///
    /// # Errors
    ///
    /// - [`EnvError::NotReset`] if [`reset()`](Self::reset) was never called.
    /// - [`EnvError::ActionCountMismatch`] if `actions.len()` is not the
    ///   number of agents.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn step(&mut self, actions: &[Action]) -> Result<StepResult, EnvError> {
        if self.phase == EpisodePhase::Uninitialized {
            return Err(EnvError::NotReset);
        }
        let n = self.n_agents();
        if actions.len() != n {
            return Err(EnvError::ActionCountMismatch {
                expected: n,
                got: actions.len(),
            });
        }

        let started = Instant::now();
        let was_terminal = self.phase == EpisodePhase::Terminal;
        self.step = StepId(self.step.0 + 1);
        let mut rewards = self.rewards.base_rewards(n);
        let mut outcomes = Vec::with_capacity(n);
        let mut metrics = StepMetrics::default();

        {
            let mut resolver = MovementResolver::new(&mut self.grid, &mut self.positions);
            for (i, &action) in actions.iter().enumerate() {
                let agent = AgentId(i as u16);
                if self.dones[i] {
                    outcomes.push(MoveOutcome::Skipped);
                    metrics.record(MoveOutcome::Skipped);
                    continue;
                }
                let outcome = resolver.attempt_move(agent, action)?;
                outcomes.push(outcome);
                metrics.record(outcome);

                let positions = resolver.positions().as_slice();
                self.dones[i] = self.goals.is_covered_by(positions);
                if self.rewards.mode() == RewardMode::Sparse {
                    let (bonus, claimed) =
                        self.rewards
                            .sparse_bonus(&self.goals, positions[i], self.bonus_claimed[i]);
                    rewards[i] += bonus;
                    self.bonus_claimed[i] = claimed;
                }
            }
        }

        // A finished episode only pays the step cost.
        if self.rewards.mode() == RewardMode::Positional && !was_terminal {
            let team = self.rewards.team_reward(&self.goals, self.positions.as_slice());
            rewards.fill(team);
        }

        if self.step.0 >= self.config.max_steps {
            self.dones.fill(true);
        }

        for (total, r) in self.total_rewards.iter_mut().zip(&rewards) {
            *total += r;
        }

        self.phase = if self.dones.iter().all(|&d| d) {
            EpisodePhase::Terminal
        } else {
            EpisodePhase::Stepping
        };
        if self.phase == EpisodePhase::Terminal && !was_terminal {
            info!(
                steps = self.step.0,
                total_rewards = ?self.total_rewards,
                "episode finished"
            );
        }

        metrics.total_us = started.elapsed().as_micros() as u64;
        self.last_metrics = metrics.clone();

        Ok(Transition {
            observations: self.observations(),
            rewards,
            dones: self.dones.clone(),
            info: StepInfo {
                step: self.step,
                phase: self.phase,
                outcomes,
                metrics,
            },
        })
    }

    /// [`step()`](Self::step) with raw action indices.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] for the first index outside
    /// the action vocabulary, before any state is touched, plus every
    /// error [`step()`](Self::step) can return.
    pub fn step_discrete(&mut self, actions: &[u32]) -> Result<StepResult, EnvError> {
        let decoded = actions
            .iter()
            .enumerate()
            .map(|(i, &raw)| {
                Action::try_from(raw).map_err(|reason| EnvError::InvalidAction {
                    agent: AgentId(i as u16),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.step(&decoded)
    }

    /// Current observations, one per agent.
    pub fn observations(&self) -> Vec<Observation> {
        observation::observe(
            self.positions.as_slice(),
            self.shape(),
            self.config.full_observable,
        )
    }

    /// Flat row-major cell index of each agent.
    pub fn state(&self) -> Vec<usize> {
        let cols = self.shape().cols() as usize;
        self.positions
            .as_slice()
            .iter()
            .map(|c| c.row as usize * cols + c.col as usize)
            .collect()
    }

    /// Reseed the environment RNG. Returns `[seed, derived]`.
    pub fn seed(&mut self, seed: u64) -> [u64; 2] {
        self.seed = seed;
        self.rng = seeding::rng_from_seed(seed);
        seeding::derive_seeds(seed)
    }

    /// The RNG seeded by [`seed()`](Self::seed), for collaborators.
    pub fn rng_mut(&mut self) -> &mut EnvRng {
        &mut self.rng
    }

    /// Read-only snapshot for rendering.
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            shape: self.shape(),
            walls: self.layout.walls().collect(),
            goals: self.goals.iter().collect(),
            agents: self.positions.as_slice().to_vec(),
        }
    }

    /// Per-agent action space.
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::default()
    }

    /// Per-agent observation bounds.
    pub fn observation_bounds(&self) -> ObservationBounds {
        ObservationBounds::new(self.n_agents(), self.config.full_observable)
    }

    /// Number of agents.
    pub fn n_agents(&self) -> usize {
        self.start_cells.len()
    }

    /// The configuration this environment was built from.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Grid extent.
    pub fn shape(&self) -> GridShape {
        self.layout.shape()
    }

    /// The static wall layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The goal set.
    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    /// The live occupancy grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The agent position table.
    pub fn positions(&self) -> &AgentPositionTable {
        &self.positions
    }

    /// Current cell of one agent.
    pub fn position(&self, agent: AgentId) -> Result<Cell, EnvError> {
        self.positions.get(agent)
    }

    /// Per-agent done flags.
    pub fn dones(&self) -> &[bool] {
        &self.dones
    }

    /// Steps taken this episode.
    pub fn step_count(&self) -> StepId {
        self.step
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Per-agent reward accumulated this episode.
    pub fn total_episode_reward(&self) -> &[f32] {
        &self.total_rewards
    }

    /// Counters from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

fn stamp_all(grid: &mut OccupancyGrid, cells: &[Cell]) {
    for (i, &cell) in cells.iter().enumerate() {
        grid.stamp(cell, AgentId(i as u16));
    }
}

impl Environment for SpreadEnv {
    type Action = Action;
    type Observation = Observation;
    type Info = StepInfo;

    fn reset(&mut self) -> Vec<Observation> {
        SpreadEnv::reset(self)
    }

    fn step(&mut self, actions: &[Action]) -> Result<StepResult, EnvError> {
        SpreadEnv::step(self, actions)
    }

    fn n_agents(&self) -> usize {
        SpreadEnv::n_agents(self)
    }
}

impl std::fmt::Debug for SpreadEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadEnv")
            .field("phase", &self.phase)
            .field("step", &self.step)
            .field("positions", &self.positions.as_slice())
            .field("dones", &self.dones)
            .finish()
    }
}
