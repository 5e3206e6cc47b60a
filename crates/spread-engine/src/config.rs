//! Environment configuration, validation, and error types.
//!
//! [`EnvConfig`] is the builder-input for constructing a [`SpreadEnv`].
//! [`validate()`](EnvConfig::validate) checks structural invariants up
//! front; the environment constructor resolves the config internally
//! to obtain the derived layout, start cells, and goal set.
//!
//! [`SpreadEnv`]: crate::SpreadEnv

use std::error::Error;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spread_core::Cell;
use spread_space::{GoalSet, GridShape, Layout, LayoutError};

/// Upper bound on agents when start and goal cells are derived from the
/// grid shape: there are four cells around the centre and four corners.
pub const MAX_DERIVED_AGENTS: usize = 4;

// ── RewardMode ─────────────────────────────────────────────────────

/// How per-step rewards are assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardMode {
    /// Every agent receives `(goal cells occupied) × reach_reward`,
    /// recomputed from scratch each step and identical for all agents.
    /// Steps taken after the episode is over pay only the step cost.
    #[default]
    #[serde(alias = "pos")]
    Positional,
    /// Step cost, plus a one-time `reach_reward` bonus to an agent the
    /// first step it is found on any goal cell.
    #[serde(alias = "neg")]
    Sparse,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating an [`EnvConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Grid shape or goal layout is invalid.
    Layout(LayoutError),
    /// Observations divide by `rows - 1` and `cols - 1`, so both
    /// dimensions must be at least 2.
    GridTooSmall {
        /// Configured rows.
        rows: u32,
        /// Configured columns.
        cols: u32,
    },
    /// `n_agents` is zero.
    NoAgents,
    /// More agents than derived start/goal cells are available.
    TooManyAgents {
        /// Configured agent count.
        n_agents: usize,
        /// Maximum supported without explicit cells.
        max: usize,
    },
    /// An explicit cell list does not have one entry per agent.
    CellCountMismatch {
        /// Which list (`start_cells` or `goal_cells`).
        list: &'static str,
        /// Number of agents.
        expected: usize,
        /// Number of cells supplied.
        got: usize,
    },
    /// A start cell is outside the grid.
    StartOutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// Two agents share a start cell.
    DuplicateStart {
        /// The shared cell.
        cell: Cell,
    },
    /// `max_steps` is zero.
    ZeroMaxSteps,
    /// A reward parameter is NaN or infinite.
    NonFiniteReward {
        /// Which parameter.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// Reading a configuration file failed.
    Io(std::io::Error),
    /// Parsing TOML failed.
    Toml(toml::de::Error),
    /// Serializing to TOML failed.
    TomlSerialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "layout: {e}"),
            Self::GridTooSmall { rows, cols } => {
                write!(f, "grid {rows}x{cols} is too small, need at least 2x2")
            }
            Self::NoAgents => write!(f, "n_agents must be at least 1"),
            Self::TooManyAgents { n_agents, max } => write!(
                f,
                "n_agents {n_agents} exceeds {max}; supply start_cells and goal_cells explicitly"
            ),
            Self::CellCountMismatch {
                list,
                expected,
                got,
            } => write!(f, "{list} has {got} entries, expected {expected}"),
            Self::StartOutOfBounds { cell } => write!(f, "start cell {cell} out of bounds"),
            Self::DuplicateStart { cell } => write!(f, "start cell {cell} shared by two agents"),
            Self::ZeroMaxSteps => write!(f, "max_steps must be at least 1"),
            Self::NonFiniteReward { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::TomlSerialize(e) => write!(f, "toml: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::TomlSerialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LayoutError> for ConfigError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing an environment.
///
/// Immutable once the environment is built. Defaults reproduce the
/// standard four-agent spread task on a 6×6 grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Grid rows. Minimum: 2.
    pub rows: u32,
    /// Grid columns. Minimum: 2.
    pub cols: u32,
    /// Number of agents. At most [`MAX_DERIVED_AGENTS`] unless both cell
    /// lists are supplied.
    pub n_agents: usize,
    /// Step ceiling: every agent is done once this many steps have run.
    pub max_steps: u64,
    /// Reward applied to every agent every step. Usually negative.
    pub step_cost: f32,
    /// Reward magnitude for occupying a goal cell.
    pub reach_reward: f32,
    /// Reward assignment scheme.
    pub reward_mode: RewardMode,
    /// When set, each agent observes every agent's position.
    pub full_observable: bool,
    /// Explicit start cells, one per agent. Derived from the grid centre
    /// when absent.
    pub start_cells: Option<Vec<Cell>>,
    /// Explicit goal cells, one per agent. The four corners when absent.
    pub goal_cells: Option<Vec<Cell>>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            n_agents: 4,
            max_steps: 50,
            step_cost: -1.0,
            reach_reward: 1.0,
            reward_mode: RewardMode::Positional,
            full_observable: false,
            start_cells: None,
            goal_cells: None,
        }
    }
}

/// The static, derived portion of an episode: everything reset restores.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) layout: Layout,
    pub(crate) start_cells: Vec<Cell>,
    pub(crate) goals: GoalSet,
}

impl EnvConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate and derive the layout, start cells, and goal set.
    pub(crate) fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        // 1. Shape.
        let shape = GridShape::new(self.rows, self.cols)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        // 2. Agent count.
        if self.n_agents == 0 {
            return Err(ConfigError::NoAgents);
        }
        let derived = self.start_cells.is_none() || self.goal_cells.is_none();
        let max = if derived {
            MAX_DERIVED_AGENTS
        } else {
            u16::MAX as usize
        };
        if self.n_agents > max {
            return Err(ConfigError::TooManyAgents {
                n_agents: self.n_agents,
                max,
            });
        }
        // 3. Episode length and rewards.
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        for (name, value) in [("step_cost", self.step_cost), ("reach_reward", self.reach_reward)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteReward { name, value });
            }
        }
        // 4. Start cells: in bounds and pairwise distinct.
        let start_cells = match &self.start_cells {
            Some(cells) => {
                self.check_len("start_cells", cells.len())?;
                cells.clone()
            }
            None => centre_cells(shape, self.n_agents),
        };
        for (i, &cell) in start_cells.iter().enumerate() {
            if !shape.contains(cell) {
                return Err(ConfigError::StartOutOfBounds { cell });
            }
            if start_cells[..i].contains(&cell) {
                return Err(ConfigError::DuplicateStart { cell });
            }
        }
        // 5. Goals.
        let goals = match &self.goal_cells {
            Some(cells) => {
                self.check_len("goal_cells", cells.len())?;
                GoalSet::new(shape, cells.iter().copied())?
            }
            None => GoalSet::corners(shape, self.n_agents)?,
        };

        Ok(ResolvedConfig {
            layout: Layout::build(shape),
            start_cells,
            goals,
        })
    }

    fn check_len(&self, list: &'static str, got: usize) -> Result<(), ConfigError> {
        if got != self.n_agents {
            return Err(ConfigError::CellCountMismatch {
                list,
                expected: self.n_agents,
                got,
            });
        }
        Ok(())
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string. Missing keys take their
    /// default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Renders this configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)
    }
}

/// The four cells around the grid centre, truncated to `n`:
/// `(mh, mv)`, `(mh-1, mv)`, `(mh, mv-1)`, `(mh-1, mv-1)` where
/// `mh = rows / 2` and `mv = cols / 2`.
fn centre_cells(shape: GridShape, n: usize) -> Vec<Cell> {
    let mh = shape.rows() as i32 / 2;
    let mv = shape.cols() as i32 / 2;
    [
        Cell::new(mh, mv),
        Cell::new(mh - 1, mv),
        Cell::new(mh, mv - 1),
        Cell::new(mh - 1, mv - 1),
    ]
    .into_iter()
    .take(n)
    .collect()
}
