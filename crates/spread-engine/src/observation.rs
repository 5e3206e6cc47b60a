//! Observation extraction and space declarations.
//!
//! Each agent observes its own `(row, col)` scaled into `[0, 1]` by
//! `(rows - 1, cols - 1)` and rounded to two decimals. With full
//! observability every agent receives the concatenation of all agents'
//! scaled positions instead, identical across agents.

use smallvec::SmallVec;
use spread_core::{Cell, Observation, ACTION_COUNT};
use spread_space::GridShape;

/// Scale `cell` into `[0, 1]²`, rounded to two decimals.
///
/// Requires a shape of at least 2×2; configuration validation
/// guarantees this.
pub fn normalize(cell: Cell, shape: GridShape) -> [f32; 2] {
    let scale = |v: i32, len: u32| round2(v as f32 / (len - 1) as f32);
    [scale(cell.row, shape.rows()), scale(cell.col, shape.cols())]
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// Build one observation per agent from `positions`.
pub fn observe(positions: &[Cell], shape: GridShape, full_observable: bool) -> Vec<Observation> {
    if full_observable {
        let joint: Observation = positions
            .iter()
            .flat_map(|&cell| normalize(cell, shape))
            .collect();
        vec![joint; positions.len()]
    } else {
        positions
            .iter()
            .map(|&cell| SmallVec::from_slice(&normalize(cell, shape)))
            .collect()
    }
}

/// Per-agent discrete action space declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionSpace {
    /// Number of discrete actions.
    pub n: usize,
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self { n: ACTION_COUNT }
    }
}

/// Per-agent box bounds of the observation vector.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationBounds {
    /// Lower bound per component.
    pub low: Vec<f32>,
    /// Upper bound per component.
    pub high: Vec<f32>,
}

impl ObservationBounds {
    /// Bounds for `n_agents` agents: 2 components, or `2 * n_agents` under
    /// full observability.
    pub fn new(n_agents: usize, full_observable: bool) -> Self {
        let dim = if full_observable { 2 * n_agents } else { 2 };
        Self {
            low: vec![0.0; dim],
            high: vec![1.0; dim],
        }
    }

    /// Number of components.
    pub fn dim(&self) -> usize {
        self.low.len()
    }

    /// Whether `obs` has the right length and lies within bounds.
    pub fn contains(&self, obs: &[f32]) -> bool {
        obs.len() == self.dim()
            && obs
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (lo, hi))| v >= lo && v <= hi)
    }
}
