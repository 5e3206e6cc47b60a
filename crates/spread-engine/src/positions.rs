//! Agent position table.

use spread_core::{AgentId, Cell, EnvError};

/// Raw store mapping each agent to its current cell.
///
/// Setting a position does not check legality; the movement resolver
/// checks bounds, walls, and occupancy before it calls [`set`](Self::set).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentPositionTable {
    cells: Vec<Cell>,
}

impl AgentPositionTable {
    /// A table holding `cells[i]` for agent `i`.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the table holds no agents.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current cell of `agent`.
    pub fn get(&self, agent: AgentId) -> Result<Cell, EnvError> {
        self.cells
            .get(agent.index())
            .copied()
            .ok_or(EnvError::UnknownAgent {
                agent,
                n_agents: self.cells.len(),
            })
    }

    /// Overwrite the cell of `agent`.
    pub fn set(&mut self, agent: AgentId, cell: Cell) -> Result<(), EnvError> {
        let n_agents = self.cells.len();
        let slot = self
            .cells
            .get_mut(agent.index())
            .ok_or(EnvError::UnknownAgent { agent, n_agents })?;
        *slot = cell;
        Ok(())
    }

    /// Replace every position at once.
    pub(crate) fn restore(&mut self, cells: &[Cell]) {
        self.cells.clear();
        self.cells.extend_from_slice(cells);
    }

    /// All positions in agent order.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// `(agent, cell)` pairs in agent order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (AgentId(i as u16), cell))
    }
}
