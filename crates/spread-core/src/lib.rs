//! Core types and traits for the Spread grid-world engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! agent and step identifiers, grid cells and cell markers, the discrete
//! action set, error types, and the [`Environment`] capability trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use action::{action_meanings, Action, ACTION_COUNT};
pub use cell::{Cell, CellMarker};
pub use error::{ActionError, EnvError};
pub use id::{AgentId, Observation, StepId};
pub use traits::{Environment, Transition};
