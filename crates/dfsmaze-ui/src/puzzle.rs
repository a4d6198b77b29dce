//! A validated maze with start and goal, ready to be solved.

use dfsmaze_core::{Maze, Point};
use dfsmaze_paths::find_path;

use crate::config::SolveConfig;
use crate::input::{InputError, parse_maze, parse_point};
use crate::render::Canvas;

/// The result of solving a [`Puzzle`].
///
/// Not finding a path is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Cells from start to goal inclusive.
    Found(Vec<Point>),
    NoPath,
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<Vec<Point>>> for Outcome {
    fn from(path: Option<Vec<Point>>) -> Self {
        path.map_or(Self::NoPath, Self::Found)
    }
}

/// A maze, start and goal that satisfy the pathfinder's preconditions:
/// the maze has the declared dimensions and both endpoints are inside it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    maze: Maze,
    start: Point,
    goal: Point,
}

impl Puzzle {
    /// Validate an already-built maze against `config`.
    pub fn new(
        config: &SolveConfig,
        maze: Maze,
        start: Point,
        goal: Point,
    ) -> Result<Self, InputError> {
        if !config.is_valid() {
            return Err(InputError::Dimensions {
                rows: config.rows,
                cols: config.cols,
            });
        }
        if (maze.rows(), maze.cols()) != (config.rows, config.cols) {
            return Err(InputError::SizeMismatch {
                declared: (config.rows, config.cols),
                found: (maze.rows(), maze.cols()),
            });
        }
        for pos in [start, goal] {
            if !maze.contains(pos) {
                return Err(InputError::OutOfBounds { pos });
            }
        }
        Ok(Self { maze, start, goal })
    }

    /// Parse the maze text and the `row,col` endpoints, then validate them.
    pub fn parse(
        config: &SolveConfig,
        maze_text: &str,
        start_text: &str,
        goal_text: &str,
    ) -> Result<Self, InputError> {
        let maze = parse_maze(maze_text)?;
        let start = parse_point(start_text)?;
        let goal = parse_point(goal_text)?;
        Self::new(config, maze, start, goal)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Run the depth-first search.
    pub fn solve(&self) -> Outcome {
        let outcome = Outcome::from(find_path(&self.maze, self.start, self.goal));
        if !outcome.is_found() {
            log::warn!("no path from {} to {}", self.start, self.goal);
        }
        outcome
    }

    /// Lay out the maze with the outcome's path for rendering.
    pub fn canvas(&self, outcome: &Outcome) -> Canvas {
        Canvas::new(&self.maze, outcome.path(), self.start, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MAZE;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn solve_reference_maze() {
        let cfg = SolveConfig::default();
        let puzzle = Puzzle::parse(&cfg, DEFAULT_MAZE, "0,0", "4,4").unwrap();
        let outcome = puzzle.solve();
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], p(0, 0));
        assert_eq!(path[8], p(4, 4));
    }

    #[test]
    fn unreachable_goal_is_no_path() {
        let cfg = SolveConfig::new(2, 2);
        let puzzle = Puzzle::parse(&cfg, "0 1\n1 0", "0,0", "1,1").unwrap();
        assert_eq!(puzzle.solve(), Outcome::NoPath);
        assert_eq!(puzzle.solve().path(), None);
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let cfg = SolveConfig::default();
        let err = Puzzle::parse(&cfg, DEFAULT_MAZE, "0,0", "5,4").unwrap_err();
        assert_eq!(err, InputError::OutOfBounds { pos: p(5, 4) });
        let err = Puzzle::parse(&cfg, DEFAULT_MAZE, "-1,0", "4,4").unwrap_err();
        assert_eq!(err, InputError::OutOfBounds { pos: p(-1, 0) });
    }

    #[test]
    fn rejects_size_mismatch() {
        let cfg = SolveConfig::new(4, 5);
        let err = Puzzle::parse(&cfg, DEFAULT_MAZE, "0,0", "3,4").unwrap_err();
        assert_eq!(
            err,
            InputError::SizeMismatch {
                declared: (4, 5),
                found: (5, 5)
            }
        );
    }

    #[test]
    fn rejects_unsupported_dimensions() {
        let cfg = SolveConfig::new(1, 1);
        let err = Puzzle::parse(&cfg, "0", "0,0", "0,0").unwrap_err();
        assert_eq!(err, InputError::Dimensions { rows: 1, cols: 1 });
    }

    #[test]
    fn parse_errors_surface_first() {
        let cfg = SolveConfig::default();
        assert!(matches!(
            Puzzle::parse(&cfg, "0 0\n0 oops", "0,0", "1,1"),
            Err(InputError::InvalidToken { .. })
        ));
        assert!(matches!(
            Puzzle::parse(&cfg, DEFAULT_MAZE, "zero", "1,1"),
            Err(InputError::InvalidPoint(_))
        ));
    }

    #[test]
    fn outcome_from_option() {
        assert_eq!(Outcome::from(None::<Vec<Point>>), Outcome::NoPath);
        assert_eq!(
            Outcome::from(Some(vec![p(0, 0)])),
            Outcome::Found(vec![p(0, 0)])
        );
    }
}
