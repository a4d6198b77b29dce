//! Parent links recorded during a search, and path reconstruction from them.

use dfsmaze_core::{Point, Range};

const NO_PARENT: usize = usize::MAX;

/// Maps each discovered cell to the cell that discovered it.
///
/// Entries are written at most once: the first discovery wins and later
/// [`insert`](Self::insert) calls for the same cell are ignored.
#[derive(Debug, Clone)]
pub struct ParentMap {
    rng: Range,
    width: usize,
    parents: Vec<usize>,
}

impl ParentMap {
    /// Create an empty map covering `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            parents: vec![NO_PARENT; rng.len()],
        }
    }

    /// The rectangle this map covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Record `parent` as the discoverer of `p`.
    ///
    /// Returns `false` (and leaves the map unchanged) if `p` already has a
    /// parent or either point lies outside the range.
    pub fn insert(&mut self, p: Point, parent: Point) -> bool {
        let (Some(i), Some(pi)) = (self.idx(p), self.idx(parent)) else {
            return false;
        };
        if self.parents[i] != NO_PARENT {
            return false;
        }
        self.parents[i] = pi;
        true
    }

    /// The cell that discovered `p`, if any.
    pub fn get(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        match self.parents[i] {
            NO_PARENT => None,
            pi => Some(self.point(pi)),
        }
    }

    /// Number of cells with a recorded parent.
    pub fn len(&self) -> usize {
        self.parents.iter().filter(|&&pi| pi != NO_PARENT).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.parents.fill(NO_PARENT);
    }

    /// Replace the covered range, dropping all entries.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.cols().max(0) as usize;
        self.parents.clear();
        self.parents.resize(rng.len(), NO_PARENT);
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let r = (p.row - self.rng.min.row) as usize;
        let c = (p.col - self.rng.min.col) as usize;
        Some(r * self.width + c)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let r = (idx / self.width) as i32 + self.rng.min.row;
        let c = (idx % self.width) as i32 + self.rng.min.col;
        Point::new(r, c)
    }
}

/// Rebuild the path from `start` to `goal` by walking `parents` backward.
///
/// Returns the cells from `start` to `goal` inclusive, or `None` when the
/// walk from `goal` reaches a cell with no parent before reaching `start`.
/// A goal equal to `start` always yields `[start]`. The walk is bounded by
/// the number of cells in the map, so a map containing a cycle yields `None`.
pub fn reconstruct(parents: &ParentMap, start: Point, goal: Point) -> Option<Vec<Point>> {
    let mut path = Vec::new();
    let mut cur = goal;
    while cur != start {
        if path.len() > parents.range().len() {
            return None;
        }
        path.push(cur);
        cur = parents.get(cur)?;
    }
    path.push(start);
    path.reverse();
    Some(path)
}
