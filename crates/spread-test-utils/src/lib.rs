//! Test fixtures and consistency checks for Spread development.
//!
//! Provides ready-made configurations ([`fixtures`]), a
//! [`ScriptedPolicy`] that replays fixed per-agent action sequences, and
//! [`assert_grid_table_consistent`], which cross-checks the occupancy
//! grid against the agent position table.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use spread_core::{Action, CellMarker};
use spread_engine::SpreadEnv;

/// Replays a fixed action list per agent, then falls back to
/// [`Action::NoOp`] once an agent's list is exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedPolicy {
    scripts: Vec<Vec<Action>>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(scripts: Vec<Vec<Action>>) -> Self {
        Self { scripts, cursor: 0 }
    }

    /// Actions for the next step, one per agent.
    pub fn next_actions(&mut self) -> Vec<Action> {
        let step = self.cursor;
        self.cursor += 1;
        self.scripts
            .iter()
            .map(|s| s.get(step).copied().unwrap_or(Action::NoOp))
            .collect()
    }

    /// Length of the longest script.
    pub fn horizon(&self) -> usize {
        self.scripts.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Panics unless the grid and the position table describe the same state:
///
/// - every agent's table cell carries that agent's marker,
/// - every agent marker on the grid matches the table,
/// - no two agents share a cell,
/// - every non-agent cell shows its static layout marker.
pub fn assert_grid_table_consistent(env: &SpreadEnv) {
    let grid = env.grid();
    let layout = env.layout();
    let positions = env.positions();

    for (agent, cell) in positions.iter() {
        assert_eq!(
            grid.marker(cell),
            Some(CellMarker::Agent(agent)),
            "agent {agent} at {cell} is not stamped on the grid"
        );
    }

    let mut agent_cells = 0;
    for cell in env.shape().cells() {
        match grid.marker(cell) {
            Some(CellMarker::Agent(agent)) => {
                agent_cells += 1;
                assert_eq!(
                    positions.get(agent).ok(),
                    Some(cell),
                    "grid shows agent {agent} at {cell} but the table disagrees"
                );
            }
            marker => assert_eq!(
                marker,
                layout.marker(cell),
                "cell {cell} lost its layout marker"
            ),
        }
    }
    assert_eq!(agent_cells, positions.len(), "agents share a cell");
}
