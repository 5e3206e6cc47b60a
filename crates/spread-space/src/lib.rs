//! Spatial data structures for the Spread grid-world engine.
//!
//! # Contents
//!
//! - [`GridShape`]: validated `rows × cols` extent with row-major ranks
//! - [`Layout`]: the static walkable/wall map built from a shape
//! - [`OccupancyGrid`]: the layout plus per-cell agent occupancy
//! - [`GoalSet`]: the ordered, immutable set of target cells

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod goals;
pub mod grid;
pub mod layout;
pub mod shape;

pub use error::LayoutError;
pub use goals::GoalSet;
pub use grid::OccupancyGrid;
pub use layout::Layout;
pub use shape::GridShape;
