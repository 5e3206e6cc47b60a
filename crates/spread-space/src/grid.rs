//! Mutable occupancy layered over a static [`Layout`].

use crate::layout::Layout;
use crate::shape::GridShape;
use spread_core::{AgentId, Cell, CellMarker};

/// The live grid: static walls plus which agent stands where.
///
/// The grid stores markers only; it does not know where agents are
/// supposed to be. Keeping it consistent with the position table is the
/// movement resolver's job, so the mutators here are deliberately raw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    layout: Layout,
    markers: Vec<CellMarker>,
}

impl OccupancyGrid {
    /// A fresh grid with no agents, seeded from `layout`.
    pub fn new(layout: Layout) -> Self {
        let markers = layout.markers().to_vec();
        Self { layout, markers }
    }

    /// The static layout beneath the occupancy.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The grid extent.
    pub fn shape(&self) -> GridShape {
        self.layout.shape()
    }

    /// Current marker at `cell`, `None` if out of bounds.
    pub fn marker(&self, cell: Cell) -> Option<CellMarker> {
        self.shape().rank(cell).map(|i| self.markers[i])
    }

    /// Whether an agent may step onto `cell`: in bounds, not a wall,
    /// not occupied.
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.marker(cell).is_some_and(CellMarker::is_vacant)
    }

    /// The agent standing on `cell`, if any.
    pub fn occupant(&self, cell: Cell) -> Option<AgentId> {
        self.marker(cell).and_then(CellMarker::occupant)
    }

    /// Write `agent`'s marker at `cell`, overwriting whatever is there.
    ///
    /// Returns `false` (and writes nothing) if `cell` is out of bounds.
    pub fn stamp(&mut self, cell: Cell, agent: AgentId) -> bool {
        match self.shape().rank(cell) {
            Some(i) => {
                self.markers[i] = CellMarker::Agent(agent);
                true
            }
            None => false,
        }
    }

    /// Remove any agent marker at `cell`, restoring the layout marker.
    pub fn vacate(&mut self, cell: Cell) {
        if let Some(i) = self.shape().rank(cell) {
            self.markers[i] = self.layout.markers()[i];
        }
    }

    /// Row-major markers, one per cell.
    pub fn markers(&self) -> &[CellMarker] {
        &self.markers
    }

    /// Dense numeric export: `0` empty, `-1` wall, `k + 1` for agent `k`.
    pub fn to_codes(&self) -> Vec<i32> {
        self.markers.iter().map(|m| m.code()).collect()
    }

    /// Every `(cell, agent)` pair currently on the grid, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, AgentId)> + '_ {
        self.shape()
            .cells()
            .zip(self.markers.iter())
            .filter_map(|(cell, m)| m.occupant().map(|id| (cell, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(Layout::build(GridShape::new(6, 6).unwrap()))
    }

    #[test]
    fn fresh_grid_matches_layout() {
        let g = grid();
        assert_eq!(g.markers(), g.layout().markers());
        assert_eq!(g.occupied().count(), 0);
    }

    #[test]
    fn stamp_and_vacate() {
        let mut g = grid();
        let cell = Cell::new(3, 3);
        assert!(g.stamp(cell, AgentId(1)));
        assert_eq!(g.occupant(cell), Some(AgentId(1)));
        assert!(!g.is_vacant(cell));
        g.vacate(cell);
        assert!(g.is_vacant(cell));
    }

    #[test]
    fn vacating_a_wall_restores_the_wall() {
        let mut g = grid();
        let wall = Cell::new(2, 2);
        assert!(g.stamp(wall, AgentId(0)));
        assert_eq!(g.marker(wall), Some(CellMarker::Agent(AgentId(0))));
        g.vacate(wall);
        assert_eq!(g.marker(wall), Some(CellMarker::Wall));
    }

    #[test]
    fn out_of_bounds_is_never_vacant() {
        let mut g = grid();
        assert!(!g.is_vacant(Cell::new(6, 0)));
        assert!(!g.stamp(Cell::new(0, -1), AgentId(0)));
    }

    #[test]
    fn codes_encode_markers() {
        let mut g = grid();
        g.stamp(Cell::new(0, 0), AgentId(2));
        let codes = g.to_codes();
        assert_eq!(codes[0], 3);
        assert_eq!(codes[2], -1);
        assert_eq!(codes[1], 0);
    }
}
