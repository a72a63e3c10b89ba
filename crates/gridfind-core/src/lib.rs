//! **gridfind-core** — Cell and grid model for gridfind pathfinding.
//!
//! This crate provides the foundational types consumed by the search
//! engine: integer grid coordinates, cells with a persistent role and a
//! transient search marking, and a shared-buffer square grid.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;

pub use cell::{Cell, CellKind, SearchState};
pub use coord::Coord;
pub use error::GridError;
pub use grid::Grid;
