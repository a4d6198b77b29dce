use dfsmaze_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Whether `a` and `b` differ by exactly one unit along exactly one axis.
#[inline]
pub fn is_step(a: Point, b: Point) -> bool {
    manhattan(a, b) == 1
}
