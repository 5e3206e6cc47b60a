//! The episode capability contract.

use crate::error::EnvError;

/// Everything one `step()` hands back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<O, I> {
    /// One observation per agent, in agent order.
    pub observations: Vec<O>,
    /// Reward each agent received for this step.
    pub rewards: Vec<f32>,
    /// Per-agent done flags after this step.
    pub dones: Vec<bool>,
    /// Auxiliary diagnostics.
    pub info: I,
}

impl<O, I> Transition<O, I> {
    /// Whether every agent is done.
    pub fn all_done(&self) -> bool {
        self.dones.iter().all(|&d| d)
    }
}

/// A multi-agent episode driven by `reset()` and `step()`.
///
/// Implementors own their state exclusively; both methods take `&mut self`
/// so no caller can observe a half-applied step.
pub trait Environment {
    /// Per-agent action type.
    type Action;
    /// Per-agent observation type.
    type Observation;
    /// Auxiliary per-step information.
    type Info;

    /// Start a fresh episode and return the initial observations.
    fn reset(&mut self) -> Vec<Self::Observation>;

    /// Apply one action per agent and advance the episode by one step.
    fn step(
        &mut self,
        actions: &[Self::Action],
    ) -> Result<Transition<Self::Observation, Self::Info>, EnvError>;

    /// Number of agents in the episode.
    fn n_agents(&self) -> usize;
}
