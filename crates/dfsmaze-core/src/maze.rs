//! A rectangular maze of free and blocked tiles.
//!
//! [`Maze`] owns a flat row-major buffer of [`Tile`]s. It is built once from
//! integer rows (0 = free, 1 = blocked) or a closure and is then only read by
//! searches, which borrow it immutably.

use std::fmt;

use crate::geom::{Point, Range};

/// A single maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Traversable floor.
    #[default]
    Free,
    /// Impassable wall.
    Blocked,
}

impl Tile {
    /// Decode the integer form used at the input boundary.
    pub const fn from_value(v: i32) -> Option<Self> {
        match v {
            0 => Some(Self::Free),
            1 => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Integer form: 0 for free, 1 for blocked.
    pub const fn value(self) -> i32 {
        match self {
            Self::Free => 0,
            Self::Blocked => 1,
        }
    }

    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

/// A `rows × cols` grid of [`Tile`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
}

impl Maze {
    /// Create a maze with every tile free.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            tiles: vec![Tile::Free; (rows as usize) * (cols as usize)],
            rows,
            cols,
        }
    }

    /// Create a maze by evaluating `f` at every position in row-major order.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Point) -> Tile) -> Self {
        let mut maze = Self::new(rows, cols);
        for p in maze.bounds() {
            let i = maze.index(p);
            maze.tiles[i] = f(p);
        }
        maze
    }

    /// Build a maze from rows of integers (0 = free, 1 = blocked).
    ///
    /// The rows must be non-empty and all have the same non-zero length.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(MazeError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MazeError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                let tile = Tile::from_value(v).ok_or(MazeError::InvalidValue {
                    pos: Point::new(r as i32, c as i32),
                    value: v,
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            rows: rows.len() as i32,
            cols: cols as i32,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The range `[0, rows) × [0, cols)`.
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows, self.cols)
    }

    /// Whether the maze contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Whether `p` is in bounds and free.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_free)
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let i = self.index(p);
        self.tiles[i] = tile;
    }

    /// Row-major iterator over every position and its tile.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }

    /// Count how many tiles equal `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// The integer rows this maze was (or could have been) built from.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|t| t.value()).collect())
            .collect()
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.row * self.cols + p.col) as usize
    }
}

impl fmt::Display for Maze {
    /// Formats the maze as whitespace-separated integer rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<Vec<i32>> as serde::Deserialize>::deserialize(deserializer)?;
        Maze::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when building a maze from integer rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell value other than 0 or 1.
    InvalidValue { pos: Point, value: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze is empty"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidValue { pos, value } => {
                write!(f, "maze cell {pos} has value {value}, expected 0 or 1")
            }
        }
    }
}

impl std::error::Error for MazeError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_serializes_as_rows() {
        let m = Maze::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[0,1],[0,0]]");
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn maze_deserialize_validates() {
        let res: Result<Maze, _> = serde_json::from_str("[[0,1],[0]]");
        assert!(res.is_err());
    }
}
