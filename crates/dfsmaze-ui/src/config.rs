//! Declared maze dimensions and input defaults.

use dfsmaze_core::Point;

/// Smallest accepted number of rows or columns.
pub const MIN_DIM: i32 = 2;
/// Largest accepted number of rows or columns.
pub const MAX_DIM: i32 = 20;
/// Rows and columns used when none are given.
pub const DEFAULT_DIM: i32 = 5;

/// The reference maze offered when no maze text is supplied.
pub const DEFAULT_MAZE: &str = "\
0 0 1 0 0
1 0 1 0 1
0 0 0 0 0
1 1 1 1 0
0 0 0 0 0";

/// The dimensions a user declares for their maze.
///
/// Maze text and coordinates are validated against these, not against
/// whatever shape the text happens to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    pub rows: i32,
    pub cols: i32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIM,
            cols: DEFAULT_DIM,
        }
    }
}

impl SolveConfig {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Whether both dimensions lie in `MIN_DIM..=MAX_DIM`.
    pub fn is_valid(&self) -> bool {
        (MIN_DIM..=MAX_DIM).contains(&self.rows) && (MIN_DIM..=MAX_DIM).contains(&self.cols)
    }

    /// The start offered by default: the top-left corner.
    pub fn default_start(&self) -> Point {
        Point::ZERO
    }

    /// The goal offered by default: the bottom-right corner.
    pub fn default_goal(&self) -> Point {
        Point::new(self.rows - 1, self.cols - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_maze() {
        let cfg = SolveConfig::default();
        assert_eq!(cfg, SolveConfig::new(5, 5));
        assert!(cfg.is_valid());
        assert_eq!(cfg.default_start(), Point::new(0, 0));
        assert_eq!(cfg.default_goal(), Point::new(4, 4));
        assert_eq!(DEFAULT_MAZE.lines().count(), 5);
    }

    #[test]
    fn dimension_limits() {
        assert!(SolveConfig::new(2, 20).is_valid());
        assert!(!SolveConfig::new(1, 5).is_valid());
        assert!(!SolveConfig::new(5, 21).is_valid());
    }
}
