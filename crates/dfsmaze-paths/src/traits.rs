use dfsmaze_core::{Maze, Point};

use crate::neighbors::Neighbors;

/// Neighbour enumeration for a search.
pub trait Pather {
    /// Append the traversable neighbours of `p` into `buf`, in the order the
    /// search should push them. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Orthogonal moves onto in-bounds free tiles, in up, down, left, right order.
impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let mut nb = Neighbors::new();
        buf.extend_from_slice(nb.cardinal(p, |q| self.is_free(q)));
    }
}
