//! Episode engine for the Spread grid-world.
//!
//! Provides [`SpreadEnv`], the episode controller that owns the occupancy
//! grid and agent position table, resolves moves in agent order through a
//! [`MovementResolver`], assigns rewards, and decides termination.
//!
//! # Quick start
//!
//! ```
//! use spread_engine::{EnvConfig, SpreadEnv};
//!
//! let mut env = SpreadEnv::new(EnvConfig::default()).unwrap();
//! env.reset();
//! loop {
//!     let result = env.step_discrete(&[4, 4, 4, 4]).unwrap();
//!     if result.all_done() {
//!         break;
//!     }
//! }
//! assert_eq!(env.step_count().0, 50);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod episode;
pub mod metrics;
pub mod movement;
pub mod observation;
pub mod positions;
pub mod render;
pub mod reward;
pub mod seeding;

pub use config::{ConfigError, EnvConfig, RewardMode, MAX_DERIVED_AGENTS};
pub use episode::{EpisodePhase, SpreadEnv, StepInfo, StepResult};
pub use metrics::StepMetrics;
pub use movement::{BlockReason, MoveOutcome, MovementResolver};
pub use observation::{ActionSpace, ObservationBounds};
pub use positions::AgentPositionTable;
pub use render::{AsciiRenderer, RenderError, RenderFrame, Renderer};
pub use reward::RewardModel;
pub use seeding::EnvRng;
