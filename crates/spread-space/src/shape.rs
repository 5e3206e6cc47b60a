//! Validated 2D grid extent.

use crate::error::LayoutError;
use spread_core::Cell;

/// A `rows × cols` grid extent.
///
/// Cells are ranked in row-major order: `[0,0], [0,1], ..., [rows-1, cols-1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: u32,
    cols: u32,
}

impl GridShape {
    /// Maximum dimension size: cells use `i32` coordinates.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new shape.
    ///
    /// Returns `Err(LayoutError::EmptyGrid)` if either dimension is 0, or
    /// `Err(LayoutError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spread_space::GridShape;
    ///
    /// let shape = GridShape::new(6, 6).unwrap();
    /// assert_eq!(shape.cell_count(), 36);
    /// assert!(GridShape::new(0, 6).is_err());
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(LayoutError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(LayoutError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows as i32 && cell.col >= 0 && cell.col < self.cols as i32
    }

    /// Row-major rank of `cell`, or `None` if out of bounds.
    pub fn rank(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row as usize * self.cols as usize + cell.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn cell_at(&self, rank: usize) -> Option<Cell> {
        if rank >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Cell::new((rank / cols) as i32, (rank % cols) as i32))
    }

    /// Check that `cell` is in bounds, with a descriptive error otherwise.
    pub fn check(&self, cell: Cell) -> Result<usize, LayoutError> {
        self.rank(cell).ok_or_else(|| LayoutError::CellOutOfBounds {
            cell,
            bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
        })
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Cell::new(r, c)))
    }
}
