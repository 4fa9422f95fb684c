//! **jumpgrid-core**: grid pathfinding primitives.
//!
//! This crate provides the foundational value types used across the
//! *jumpgrid* workspace: integer points in screen coordinates and the
//! ordinal-indexable 8-way compass with its jump-point-search pruning
//! rules.

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::Point;
