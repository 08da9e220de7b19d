//! Weighted A* search and waypoint extraction for tile maps.
//!
//! Each named map owns a [`Pathfinder`]: a cost grid
//! ([`tilenav_grid::CellGrid`]) plus the transient state of one search.
//! [`PathfinderRegistry`] hands those instances out by map key, creating
//! them on first use. A query runs synchronously to completion:
//!
//! - **A\*** over the weighted grid ([`Pathfinder::find_path`]), expanding 4
//!   or 8 neighbors with step costs 10/14 plus the entered cell's own cost;
//! - an ordered-tree frontier with exact `(score, creation)` ordering, so
//!   equal-cost ties resolve deterministically and score improvements
//!   requeue cells in place;
//! - waypoint extraction that collapses straight 8-way runs down to their
//!   endpoints (the start cell is never part of the result).
//!
//! Grid contents, the diagonal-movement toggle, and rectangular patches are
//! managed through the same [`Pathfinder`]; see [`tilenav_grid`] for the
//! grid semantics. An unreachable goal is an expected outcome (`None`), not
//! an error.

mod astar;
mod frontier;
mod pathfinder;
mod registry;
mod waypoints;

pub use pathfinder::Pathfinder;
pub use registry::PathfinderRegistry;
