//! Spread: a multi-agent grid-world where a team must cover every goal cell.
//!
//! This is the facade crate that re-exports the public API from the Spread
//! sub-crates. Most users only need `spread` as a single dependency.
//!
//! # Quick start
//!
//! ```rust
//! use spread::prelude::*;
//!
//! let config = EnvConfig {
//!     reward_mode: RewardMode::Sparse,
//!     max_steps: 20,
//!     ..EnvConfig::default()
//! };
//! let mut env = SpreadEnv::new(config).unwrap();
//! let obs = env.reset();
//! assert_eq!(obs.len(), 4);
//!
//! let result = env
//!     .step(&[Action::Right, Action::Right, Action::Left, Action::Left])
//!     .unwrap();
//! assert_eq!(result.rewards, vec![-1.0; 4]);
//! assert_eq!(result.info.step, StepId(1));
//!
//! let board = AsciiRenderer::default().render(&env.render_frame()).unwrap();
//! assert_eq!(board.lines().count(), 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spread-core` | IDs, cells, actions, errors, the `Environment` trait |
//! | [`space`] | `spread-space` | Grid shape, wall layout, occupancy grid, goal set |
//! | [`engine`] | `spread-engine` | Episode controller, movement, rewards, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`spread-core`).
///
/// Contains [`types::Cell`], [`types::Action`], the error enums, and the
/// [`types::Environment`] trait.
pub use spread_core as types;

/// Grid layout and occupancy (`spread-space`).
///
/// [`space::Layout`] builds the static walls; [`space::OccupancyGrid`]
/// overlays agent markers; [`space::GoalSet`] holds the targets.
pub use spread_space as space;

/// Episode engine (`spread-engine`).
///
/// [`engine::SpreadEnv`] drives episodes; [`engine::EnvConfig`] configures
/// them.
pub use spread_engine as engine;

/// Common imports for typical Spread usage.
///
/// ```rust
/// use spread::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use spread_core::{
        action_meanings, Action, AgentId, Cell, CellMarker, Environment, Observation, StepId,
        Transition,
    };

    // Errors
    pub use spread_core::{ActionError, EnvError};
    pub use spread_engine::{ConfigError, RenderError};
    pub use spread_space::LayoutError;

    // Space
    pub use spread_space::{GoalSet, GridShape, Layout, OccupancyGrid};

    // Engine
    pub use spread_engine::{
        AsciiRenderer, EnvConfig, EpisodePhase, MoveOutcome, RenderFrame, Renderer, RewardMode,
        SpreadEnv, StepInfo, StepMetrics, StepResult,
    };
}
