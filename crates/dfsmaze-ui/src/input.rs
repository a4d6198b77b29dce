//! Parsing of the textual maze and `row,col` coordinates.

use std::fmt;

use dfsmaze_core::{Maze, MazeError, Point};

/// Parse a maze written as one row per line of whitespace-separated
/// integers (0 = free, 1 = blocked).
///
/// Leading and trailing whitespace of the whole text is ignored.
pub fn parse_maze(text: &str) -> Result<Maze, InputError> {
    let rows = text
        .trim()
        .lines()
        .enumerate()
        .map(|(line, s)| {
            s.split_whitespace()
                .map(|tok| {
                    tok.parse::<i32>().map_err(|_| InputError::InvalidToken {
                        line,
                        token: tok.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    let maze = Maze::from_rows(&rows)?;
    log::debug!("parsed {}x{} maze", maze.rows(), maze.cols());
    Ok(maze)
}

/// Parse a coordinate written as `row,col`.
pub fn parse_point(text: &str) -> Result<Point, InputError> {
    let invalid = || InputError::InvalidPoint(text.to_string());
    let mut parts = text.split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok(Point::new(row, col))
}

/// Errors reported at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A maze token that is not an integer.
    InvalidToken { line: usize, token: String },
    /// The integer rows do not form a valid maze.
    Maze(MazeError),
    /// A coordinate not of the form `row,col`.
    InvalidPoint(String),
    /// Declared dimensions outside the accepted limits.
    Dimensions { rows: i32, cols: i32 },
    /// The maze text does not have the declared dimensions.
    SizeMismatch {
        declared: (i32, i32),
        found: (i32, i32),
    },
    /// The start or goal lies outside the declared maze.
    OutOfBounds { pos: Point },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { line, token } => {
                write!(f, "maze line {} has non-integer token \u{201c}{token}\u{201d}", line + 1)
            }
            Self::Maze(e) => write!(f, "{e}"),
            Self::InvalidPoint(s) => {
                write!(f, "position \u{201c}{s}\u{201d} is not of the form row,col")
            }
            Self::Dimensions { rows, cols } => write!(
                f,
                "maze size {rows}x{cols} is outside the supported {}..={} range",
                crate::MIN_DIM,
                crate::MAX_DIM
            ),
            Self::SizeMismatch { declared, found } => write!(
                f,
                "maze is {}x{} but {}x{} was declared",
                found.0, found.1, declared.0, declared.1
            ),
            Self::OutOfBounds { pos } => write!(f, "start or goal {pos} is outside the maze"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for InputError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MAZE;
    use dfsmaze_core::Tile;

    #[test]
    fn parse_reference_maze() {
        let m = parse_maze(DEFAULT_MAZE).unwrap();
        assert_eq!(m.rows(), 5);
        assert_eq!(m.cols(), 5);
        assert_eq!(m.at(Point::new(0, 2)), Some(Tile::Blocked));
        assert_eq!(m.at(Point::new(4, 4)), Some(Tile::Free));
        assert_eq!(m.count(Tile::Blocked), 8);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let m = parse_maze("\n\n  0 1\t\r\n1   0 \n\n").unwrap();
        assert_eq!(m.to_rows(), vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn parse_rejects_non_integers() {
        assert_eq!(
            parse_maze("0 0\n0 x").unwrap_err(),
            InputError::InvalidToken {
                line: 1,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_ragged_and_empty() {
        assert!(matches!(
            parse_maze("0 0\n0").unwrap_err(),
            InputError::Maze(MazeError::Ragged { row: 1, .. })
        ));
        assert_eq!(parse_maze("   \n ").unwrap_err(), InputError::Maze(MazeError::Empty));
        // A blank line inside the maze is a row with no cells.
        assert!(parse_maze("0 0\n\n0 0").is_err());
    }

    #[test]
    fn parse_rejects_other_values() {
        assert!(matches!(
            parse_maze("0 3").unwrap_err(),
            InputError::Maze(MazeError::InvalidValue { value: 3, .. })
        ));
    }

    #[test]
    fn parse_points() {
        assert_eq!(parse_point("0,0"), Ok(Point::new(0, 0)));
        assert_eq!(parse_point(" 4 , 3 "), Ok(Point::new(4, 3)));
        assert_eq!(parse_point("-1,2"), Ok(Point::new(-1, 2)));
        for bad in ["", "1", "1,2,3", "a,b", "1;2", "1,"] {
            assert_eq!(
                parse_point(bad),
                Err(InputError::InvalidPoint(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InputError::OutOfBounds {
                pos: Point::new(5, 0)
            }
            .to_string(),
            "start or goal (5, 0) is outside the maze"
        );
        assert_eq!(
            InputError::SizeMismatch {
                declared: (5, 5),
                found: (4, 5)
            }
            .to_string(),
            "maze is 4x5 but 5x5 was declared"
        );
    }
}
