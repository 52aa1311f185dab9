//! **skerry-core** — Navigation grid for sea charts (core types).
//!
//! This crate provides the chart model used across the *skerry*
//! workspace: geometry primitives, compass directions, cost-bearing grid
//! cells, and the [`Grid`] that ties the cell table, text overlay and the
//! boat/treasure entities together. The path search itself lives in
//! `skerry-paths`.

pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use direction::Direction;
pub use error::GridError;
pub use geom::{Point, octile};
pub use grid::{BOAT, Grid, ISLAND, PATH_MARK, TREASURE, WATER, locate_marker};
pub use node::{Node, UNREACHABLE};
