use dfsmaze_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbours of a grid point in search order
/// (up, down, left, right), filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbours of `p` in up, down, left, right
    /// order, keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_and_filter() {
        let mut nb = Neighbors::new();
        let p = Point::new(5, 5);
        assert_eq!(
            nb.cardinal(p, |_| true),
            &[
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(5, 4),
                Point::new(5, 6),
            ]
        );
        assert_eq!(
            nb.cardinal(p, |q| q.row == 5),
            &[Point::new(5, 4), Point::new(5, 6)]
        );
    }
}
