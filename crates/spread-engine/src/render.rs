//! Rendering hook.
//!
//! The engine exposes a read-only [`RenderFrame`] snapshot; drawing is
//! left to a [`Renderer`]. [`AsciiRenderer`] is the built-in text
//! backend, useful in logs and examples.

use std::fmt;

use spread_core::Cell;
use spread_space::GridShape;

/// Read-only view of one episode state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame {
    /// Grid extent.
    pub shape: GridShape,
    /// Wall cells, row-major.
    pub walls: Vec<Cell>,
    /// Goal cells in declaration order.
    pub goals: Vec<Cell>,
    /// Agent cells in agent order.
    pub agents: Vec<Cell>,
}

/// Errors from a [`Renderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A frame cell lies outside the frame's shape.
    CellOutOfBounds {
        /// What the cell was (`"wall"`, `"goal"`, or `"agent"`).
        kind: &'static str,
        /// The offending cell.
        cell: Cell,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { kind, cell } => {
                write!(f, "{kind} cell {cell} is outside the frame")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Turns a [`RenderFrame`] into some presentable output.
pub trait Renderer {
    /// What a rendered frame looks like.
    type Output;

    /// Draw `frame`.
    fn render(&mut self, frame: &RenderFrame) -> Result<Self::Output, RenderError>;
}

/// Text renderer: one line per row.
///
/// Agents are drawn as their index (base 36, so `0`-`9` then `a`-`z`,
/// `@` beyond that), taking precedence over goals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiRenderer {
    /// Walkable empty cell.
    pub empty: char,
    /// Wall cell.
    pub wall: char,
    /// Unoccupied goal cell.
    pub goal: char,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self {
            empty: '.',
            wall: '#',
            goal: '*',
        }
    }
}

impl AsciiRenderer {
    fn agent_glyph(index: usize) -> char {
        u32::try_from(index)
            .ok()
            .and_then(|i| char::from_digit(i, 36))
            .unwrap_or('@')
    }
}

impl Renderer for AsciiRenderer {
    type Output = String;

    fn render(&mut self, frame: &RenderFrame) -> Result<String, RenderError> {
        let shape = frame.shape;
        let mut canvas = vec![self.empty; shape.cell_count()];

        let layers = [
            ("wall", self.wall, frame.walls.as_slice()),
            ("goal", self.goal, frame.goals.as_slice()),
        ];
        for (kind, glyph, cells) in layers {
            for &cell in cells {
                let i = shape
                    .rank(cell)
                    .ok_or(RenderError::CellOutOfBounds { kind, cell })?;
                canvas[i] = glyph;
            }
        }
        for (index, &cell) in frame.agents.iter().enumerate() {
            let i = shape.rank(cell).ok_or(RenderError::CellOutOfBounds {
                kind: "agent",
                cell,
            })?;
            canvas[i] = Self::agent_glyph(index);
        }

        let cols = shape.cols() as usize;
        let mut out = String::with_capacity(canvas.len() + shape.rows() as usize);
        for row in canvas.chunks(cols) {
            out.extend(row);
            out.push('\n');
        }
        Ok(out)
    }
}
