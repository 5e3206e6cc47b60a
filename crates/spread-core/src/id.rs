//! Strongly-typed identifiers and the [`Observation`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies an agent within an episode.
///
/// Agents are numbered densely from zero in the order they appear in the
/// environment configuration. `AgentId(n)` is the n-th agent, and moves
/// are always resolved in increasing `AgentId` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u16);

impl AgentId {
    /// Zero-based index into per-agent tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based occupancy code written into the grid for this agent.
    ///
    /// Code `0` is reserved for empty cells and negative codes for walls,
    /// so agent `k` is stored as `k + 1`.
    pub fn marker_code(self) -> i32 {
        i32::from(self.0) + 1
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for AgentId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter within an episode.
///
/// Zero after reset; incremented once at the start of every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A single agent's observation vector.
///
/// Uses `SmallVec<[f32; 8]>` so that both the partial view (2 values) and
/// the full view of up to four agents (8 values) stay on the stack.
pub type Observation = SmallVec<[f32; 8]>;
