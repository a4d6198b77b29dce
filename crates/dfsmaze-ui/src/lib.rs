//! Presentation boundary for the dfsmaze demonstrator.
//!
//! Everything the pathfinder deliberately does not do lives here: parsing
//! the textual maze and coordinates, validating them against the declared
//! dimensions, turning a search result into an [`Outcome`], and laying the
//! maze and path out as a [`Canvas`] for a renderer.

pub mod config;
pub mod input;
pub mod mapgen;
pub mod puzzle;
pub mod render;

pub use config::{DEFAULT_DIM, DEFAULT_MAZE, MAX_DIM, MIN_DIM, SolveConfig};
pub use input::{InputError, parse_maze, parse_point};
pub use mapgen::MazeGen;
pub use puzzle::{Outcome, Puzzle};
pub use render::{Canvas, Mark};
