//! Error types for the Spread engine.
//!
//! Rejected moves (off-grid, into a wall, into an occupied cell) are a
//! normal outcome of movement and never appear here. These enums cover
//! caller contract violations only.

use crate::id::AgentId;
use std::error::Error;
use std::fmt;

/// Errors from decoding a raw action index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The raw value is outside the action vocabulary.
    InvalidAction {
        /// The offending raw value.
        value: u32,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { value } => write!(f, "action {value} not found"),
        }
    }
}

impl Error for ActionError {}

/// Errors from driving an episode with `reset()` / `step()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvError {
    /// An agent was given an action outside the vocabulary.
    InvalidAction {
        /// The agent the action was addressed to.
        agent: AgentId,
        /// The underlying decode error.
        reason: ActionError,
    },
    /// An agent identifier is not part of this episode.
    UnknownAgent {
        /// The requested agent.
        agent: AgentId,
        /// Number of agents in the episode.
        n_agents: usize,
    },
    /// The action batch does not hold exactly one action per agent.
    ActionCountMismatch {
        /// Number of agents in the episode.
        expected: usize,
        /// Number of actions supplied.
        got: usize,
    },
    /// `step()` was called before the first `reset()`.
    NotReset,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { agent, reason } => {
                write!(f, "agent {agent}: {reason}")
            }
            Self::UnknownAgent { agent, n_agents } => {
                write!(f, "agent {agent} out of range (n_agents={n_agents})")
            }
            Self::ActionCountMismatch { expected, got } => {
                write!(f, "expected {expected} actions, got {got}")
            }
            Self::NotReset => write!(f, "step() called before reset()"),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAction { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
