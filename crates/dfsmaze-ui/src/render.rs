//! Render model: what to draw in each maze cell.
//!
//! A [`Canvas`] is built in layers. Walls and floor come first, path cells
//! are then marked with their step index, and the start and goal marks go
//! on top. Renderers only decide how each [`Mark`] looks.

use std::fmt;

use dfsmaze_core::{Maze, Point, Tile};

/// What occupies a single cell of the rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Wall,
    Floor,
    /// A path cell, with its index along the path (start is 0).
    Step(usize),
    Start,
    Goal,
}

impl Mark {
    /// Short textual label: `#`, `.`, the step index, `S` or `G`.
    pub fn label(self) -> String {
        match self {
            Self::Wall => "#".to_string(),
            Self::Floor => ".".to_string(),
            Self::Step(i) => i.to_string(),
            Self::Start => "S".to_string(),
            Self::Goal => "G".to_string(),
        }
    }
}

/// A `rows × cols` grid of [`Mark`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    marks: Vec<Mark>,
    rows: i32,
    cols: i32,
}

impl Canvas {
    /// Lay out `maze`, the optional `path`, and the endpoints.
    ///
    /// Path cells and endpoints outside the maze are ignored.
    pub fn new(maze: &Maze, path: Option<&[Point]>, start: Point, goal: Point) -> Self {
        let mut canvas = Self {
            marks: maze
                .iter()
                .map(|(_, t)| match t {
                    Tile::Blocked => Mark::Wall,
                    Tile::Free => Mark::Floor,
                })
                .collect(),
            rows: maze.rows(),
            cols: maze.cols(),
        };
        for (i, &p) in path.unwrap_or_default().iter().enumerate() {
            canvas.set(p, Mark::Step(i));
        }
        canvas.set(start, Mark::Start);
        canvas.set(goal, Mark::Goal);
        canvas
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The mark at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Mark> {
        self.index(p).map(|i| self.marks[i])
    }

    /// Iterate over the rows of marks, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        self.marks.chunks(self.cols.max(1) as usize)
    }

    /// Width in characters needed for the widest label.
    pub fn cell_width(&self) -> usize {
        self.marks
            .iter()
            .map(|m| m.label().len())
            .max()
            .unwrap_or(1)
    }

    fn set(&mut self, p: Point, mark: Mark) {
        if let Some(i) = self.index(p) {
            self.marks[i] = mark;
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }
}

impl fmt::Display for Canvas {
    /// Plain-text rendering with right-aligned labels separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.cell_width();
        for (r, line) in self.lines().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, mark) in line.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>w$}", mark.label())?;
            }
        }
        Ok(())
    }
}
