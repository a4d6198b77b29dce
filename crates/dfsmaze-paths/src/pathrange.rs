use dfsmaze_core::{Point, Range};

use crate::parents::ParentMap;

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier and expanded (the goal is not expanded).
    pub expanded: usize,
    /// Cells marked visited, the start included.
    pub visited: usize,
    /// Frontier entries left unexpanded when the goal was popped.
    pub abandoned: usize,
    /// Whether the goal was popped.
    pub found: bool,
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search state for depth-first pathfinding on a grid rectangle.
///
/// `PathRange` owns the visited table, the parent map, the frontier stack
/// and a neighbour scratch buffer, so that repeated searches reuse their
/// allocations. Every search resets this state before it starts, and the
/// state of the last search stays readable until the next one.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) visited: Vec<bool>,
    pub(crate) parents: ParentMap,
    pub(crate) stack: Vec<usize>,
    pub(crate) stats: SearchStats,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            visited: vec![false; len],
            parents: ParentMap::new(rng),
            stack: Vec::new(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, resizing the search tables.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.cols().max(0) as usize;
        self.visited.clear();
        self.visited.resize(rng.len(), false);
        self.parents.set_range(rng);
        self.stack.clear();
        self.stats = SearchStats::default();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters from the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Parent links recorded by the last search.
    #[inline]
    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }

    /// Whether the last search marked `p` visited.
    pub fn visited_at(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    /// Clear the visited table, parent map, frontier and counters.
    pub(crate) fn reset(&mut self) {
        self.visited.fill(false);
        self.parents.clear();
        self.stack.clear();
        self.stats = SearchStats::default();
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let r = (p.row - self.rng.min.row) as usize;
        let c = (p.col - self.rng.min.col) as usize;
        Some(r * self.width + c)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let r = (idx / self.width) as i32 + self.rng.min.row;
        let c = (idx % self.width) as i32 + self.rng.min.col;
        Point::new(r, c)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 8,
            visited: 11,
            abandoned: 2,
            found: true,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }

    #[test]
    fn pathrange_round_trip() {
        let rng = Range::new(1, 2, 10, 20);
        let pr = PathRange::new(rng);
        let json = serde_json::to_string(&pr).unwrap();
        let back: PathRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        // Search state is freshly initialized (not serialized).
        assert_eq!(back.stats(), SearchStats::default());
        assert_eq!(back.visited.len(), rng.len());
    }
}
