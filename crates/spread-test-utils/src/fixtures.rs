//! Reusable environment configurations.
//!
//! - [`default_config`]: the standard 6×6, four-agent task.
//! - [`corridor_config`]: two agents whose goals are each other's starts.
//! - [`pair_config`]: two agents with explicit starts and goals.

use spread_core::Cell;
use spread_engine::{EnvConfig, RewardMode, SpreadEnv};

/// The standard 6×6, four-agent, 50-step positional task.
pub fn default_config() -> EnvConfig {
    EnvConfig::default()
}

/// Two agents at either end of the central band of a `3 × cols` grid,
/// each targeting the other's start. Arrival is collective, so the team
/// already covers its goals before the first step.
pub fn corridor_config(cols: u32) -> EnvConfig {
    let last = cols as i32 - 1;
    EnvConfig {
        rows: 3,
        cols,
        ..pair_config(
            [Cell::new(1, 0), Cell::new(1, last)],
            [Cell::new(1, last), Cell::new(1, 0)],
            RewardMode::Positional,
        )
    }
}

/// Two agents on a 6×6 grid with explicit start and goal cells.
pub fn pair_config(starts: [Cell; 2], goals: [Cell; 2], mode: RewardMode) -> EnvConfig {
    EnvConfig {
        n_agents: 2,
        reward_mode: mode,
        start_cells: Some(starts.to_vec()),
        goal_cells: Some(goals.to_vec()),
        ..EnvConfig::default()
    }
}

/// Build and reset an environment from `config`.
///
/// Panics if the configuration is invalid.
pub fn ready_env(config: EnvConfig) -> SpreadEnv {
    let mut env = match SpreadEnv::new(config) {
        Ok(env) => env,
        Err(e) => panic!("fixture config rejected: {e}"),
    };
    env.reset();
    env
}
