//! **dfsmaze-core**: core types for the dfsmaze demonstrator.
//!
//! This crate provides the foundational types shared by the pathfinder and
//! the presentation layer: row/column geometry primitives and an immutable
//! rectangular maze of free and blocked tiles.

pub mod geom;
pub mod maze;

pub use geom::{Point, Range, RangeIter};
pub use maze::{Maze, MazeError, Tile};
