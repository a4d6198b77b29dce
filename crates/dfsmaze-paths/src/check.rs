//! Structural validation of paths against a maze.

use std::fmt;

use dfsmaze_core::{Maze, Point};

use crate::distance::is_step;

/// Why a path is not a valid walk through a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has no cells.
    Empty,
    /// A cell lies outside the maze.
    OutOfBounds { index: usize, pos: Point },
    /// A cell after the first is a wall.
    Blocked { index: usize, pos: Point },
    /// Two consecutive cells are not orthogonal neighbours.
    NotAdjacent { index: usize, from: Point, to: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::OutOfBounds { index, pos } => {
                write!(f, "path step {index} at {pos} is outside the maze")
            }
            Self::Blocked { index, pos } => write!(f, "path step {index} at {pos} is a wall"),
            Self::NotAdjacent { index, from, to } => {
                write!(f, "path step {index} jumps from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Check that `path` is a walk of orthogonal unit steps through `maze`.
///
/// The first cell only has to be in bounds, since searches start from the
/// given start even when it is a wall; every later cell must be free.
pub fn check_path(maze: &Maze, path: &[Point]) -> Result<(), PathError> {
    let Some(&first) = path.first() else {
        return Err(PathError::Empty);
    };
    if !maze.contains(first) {
        return Err(PathError::OutOfBounds {
            index: 0,
            pos: first,
        });
    }
    for (i, w) in path.windows(2).enumerate() {
        let (from, to) = (w[0], w[1]);
        let index = i + 1;
        if !maze.contains(to) {
            return Err(PathError::OutOfBounds { index, pos: to });
        }
        if !is_step(from, to) {
            return Err(PathError::NotAdjacent { index, from, to });
        }
        if !maze.is_free(to) {
            return Err(PathError::Blocked { index, pos: to });
        }
    }
    Ok(())
}
