//! Jump-point pathfinding on uniform-cost 2D grids.
//!
//! This crate implements precomputed jump point search: the map is analyzed
//! once up front, and every subsequent query runs A* over a handful of jump
//! points instead of every open cell.
//!
//! - **Jump tables** ([`JumpGrid::build`]) mark jump points and record, per
//!   cell and direction, how far a search may travel in one move
//! - **Waypoint queries** ([`PathBuffer::find_path`]) return the start, the
//!   jump points taken, and the goal
//! - **Step-wise queries** ([`PathBuffer::search`]) expose the same search
//!   one expansion at a time, for callers on a frame budget
//! - **Route expansion** ([`expand_path`]) interpolates waypoints into the
//!   full cell-by-cell route
//!
//! [`JumpGrid`] owns the map and its tables; [`PathBuffer`] owns the
//! per-search node arena and can be reused across queries and across grids,
//! incurring no allocations once warmed up.

mod buffer;
mod distance;
mod grid;
mod precompute;
mod search;

pub use buffer::{PathBuffer, PathNode};
pub use distance::{chebyshev, diagonal_cost, octile, path_cost};
pub use grid::{GridParseError, JumpGrid};
pub use search::{Search, SearchState, expand_path};
