//! Static walkable/wall layout (the grid builder).

use crate::shape::GridShape;
use spread_core::{Cell, CellMarker};

/// The static map of an episode: which cells are walls.
///
/// Built by [`Layout::build`]: the central horizontal band (row
/// `rows / 2`) and the two leftmost and two rightmost columns are
/// walkable, every other cell is a wall. The result is a ring-shaped
/// corridor that depends only on the grid shape.
///
/// A `Layout` never holds agent markers; occupancy lives in
/// [`OccupancyGrid`](crate::OccupancyGrid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    shape: GridShape,
    markers: Vec<CellMarker>,
}

impl Layout {
    /// Build the corridor layout for `shape`.
    ///
    /// Pure and infallible: every validated shape yields a layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use spread_core::Cell;
    /// use spread_space::{GridShape, Layout};
    ///
    /// let layout = Layout::build(GridShape::new(6, 6).unwrap());
    /// assert!(layout.is_walkable(Cell::new(3, 3))); // central band
    /// assert!(layout.is_walkable(Cell::new(0, 1))); // left columns
    /// assert!(layout.is_wall(Cell::new(0, 3)));
    /// ```
    pub fn build(shape: GridShape) -> Self {
        let rows = shape.rows() as i32;
        let cols = shape.cols() as i32;
        let band = rows / 2;
        let markers = shape
            .cells()
            .map(|cell| {
                let open = cell.row == band || cell.col < 2 || cell.col >= cols - 2;
                if open {
                    CellMarker::Empty
                } else {
                    CellMarker::Wall
                }
            })
            .collect();
        Self { shape, markers }
    }

    /// The grid extent.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Static marker at `cell` (`Empty` or `Wall`), `None` if out of bounds.
    pub fn marker(&self, cell: Cell) -> Option<CellMarker> {
        self.shape.rank(cell).map(|i| self.markers[i])
    }

    /// Whether `cell` is an in-bounds wall.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.marker(cell) == Some(CellMarker::Wall)
    }

    /// Whether `cell` is in bounds and not a wall.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.marker(cell) == Some(CellMarker::Empty)
    }

    /// All wall cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.shape
            .cells()
            .zip(self.markers.iter())
            .filter(|(_, m)| **m == CellMarker::Wall)
            .map(|(cell, _)| cell)
    }

    /// Row-major markers, one per cell.
    pub fn markers(&self) -> &[CellMarker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: u32, cols: u32) -> Layout {
        Layout::build(GridShape::new(rows, cols).unwrap())
    }

    #[test]
    fn six_by_six_ring() {
        let l = layout(6, 6);
        // Row 3 is the band; columns 0, 1, 4, 5 are corridors.
        for c in 0..6 {
            assert!(l.is_walkable(Cell::new(3, c)), "band cell (3,{c})");
        }
        for r in 0..6 {
            for c in [0, 1, 4, 5] {
                assert!(l.is_walkable(Cell::new(r, c)), "corridor ({r},{c})");
            }
        }
        let walls: Vec<Cell> = l.walls().collect();
        // Columns 2 and 3, every row except the band.
        assert_eq!(walls.len(), 10);
        assert!(walls.contains(&Cell::new(2, 2)));
        assert!(walls.contains(&Cell::new(2, 3)));
        assert!(!walls.contains(&Cell::new(3, 2)));
    }

    #[test]
    fn narrow_grid_has_no_walls() {
        let l = layout(5, 4);
        assert_eq!(l.walls().count(), 0);
        let l = layout(1, 1);
        assert!(l.is_walkable(Cell::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_is_neither_wall_nor_walkable() {
        let l = layout(6, 6);
        let outside = Cell::new(-1, 0);
        assert!(!l.is_wall(outside));
        assert!(!l.is_walkable(outside));
        assert_eq!(l.marker(outside), None);
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(layout(7, 9), layout(7, 9));
    }
}
