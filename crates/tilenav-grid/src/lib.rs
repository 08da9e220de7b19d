//! Weighted cell grids and geometry for tile-map pathfinding.
//!
//! This crate holds the map-side types shared by the search crates: the
//! [`Point`] coordinate type and the [`CellGrid`] of per-cell traversal
//! costs. Cells cost `0` or more to enter; [`OBSTACLE`] marks impassable
//! cells, and any read outside the grid yields [`OBSTACLE`] as well.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! geometry types.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{CellGrid, GridError, OBSTACLE};
