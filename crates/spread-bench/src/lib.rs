//! Benchmark profiles and utilities for the Spread engine.
//!
//! Provides pre-built [`EnvConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 64x64 grid with 16 agents
//! - [`stress_profile`]: 256x256 grid with 64 agents
//! - [`action_batches`]: deterministic raw action sequences via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::Rng;
use spread_core::{Cell, ACTION_COUNT};
use spread_engine::seeding::rng_from_seed;
use spread_engine::{EnvConfig, RewardMode};

/// Build a reference benchmark profile: 64x64 grid, 16 agents.
///
/// Agents start spread along the central band; goals sit on the two
/// outer walkable columns.
pub fn reference_profile() -> EnvConfig {
    band_profile(64, 16, 500)
}

/// Build a stress benchmark profile: 256x256 grid, 64 agents.
pub fn stress_profile() -> EnvConfig {
    band_profile(256, 64, 2000)
}

fn band_profile(size: u32, n_agents: usize, max_steps: u64) -> EnvConfig {
    let band = size as i32 / 2;
    let last = size as i32 - 1;
    let spacing = (size as usize / n_agents).max(1) as i32;
    let start_cells = (0..n_agents as i32)
        .map(|i| Cell::new(band, i * spacing))
        .collect();
    let goal_cells = (0..n_agents as i32)
        .map(|i| {
            let col = if i % 2 == 0 { 0 } else { last };
            Cell::new(i / 2, col)
        })
        .collect();

    EnvConfig {
        rows: size,
        cols: size,
        n_agents,
        max_steps,
        reward_mode: RewardMode::Positional,
        start_cells: Some(start_cells),
        goal_cells: Some(goal_cells),
        ..EnvConfig::default()
    }
}

/// Generate `steps` batches of `n_agents` raw actions from `seed`.
pub fn action_batches(seed: u64, n_agents: usize, steps: usize) -> Vec<Vec<u32>> {
    let mut rng = rng_from_seed(seed);
    (0..steps)
        .map(|_| {
            (0..n_agents)
                .map(|_| rng.random_range(0..ACTION_COUNT as u32))
                .collect()
        })
        .collect()
}
