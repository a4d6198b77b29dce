use dfsmaze_core::{Maze, Point};

use crate::PathRange;
use crate::parents::reconstruct;
use crate::traits::Pather;

/// Find a path from `start` to `goal` with depth-first search.
///
/// Returns the cells from `start` to `goal` inclusive, or `None` if the goal
/// cannot be reached through free cells. Every call allocates its own search
/// state, so the function is pure and reentrant.
///
/// `start` is never checked against the maze: a blocked start is searched
/// from like any other cell. Callers are expected to pass in-bounds
/// coordinates; an out-of-bounds start yields `None`.
pub fn find_path(maze: &Maze, start: Point, goal: Point) -> Option<Vec<Point>> {
    PathRange::new(maze.bounds()).dfs_path(maze, start, goal)
}

impl PathRange {
    /// Search from `from` to `to` depth-first and reconstruct the path.
    ///
    /// The frontier is a LIFO stack seeded with `from`. Neighbours are taken
    /// in the order `pather` yields them and are marked visited as they are
    /// pushed, so no cell is pushed twice. The search stops when `to` is
    /// popped; whatever remains on the stack is abandoned.
    ///
    /// The path found depends on neighbour order and is generally not the
    /// shortest one.
    pub fn dfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<Vec<Point>> {
        self.reset();

        let Some(si) = self.idx(from) else {
            log::debug!("dfs: start {from} is outside {}", self.rng);
            return None;
        };
        self.visited[si] = true;
        self.stats.visited = 1;
        self.stack.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.stack.pop() {
            let cp = self.point(ci);
            if cp == to {
                self.stats.found = true;
                self.stats.abandoned = self.stack.len();
                break;
            }

            self.stats.expanded += 1;
            log::trace!("dfs: expanding {cp}");

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.stats.visited += 1;
                self.parents.insert(np, cp);
                self.stack.push(ni);
            }
        }

        self.nbuf = nbuf;

        let path = reconstruct(&self.parents, from, to);
        log::debug!(
            "dfs {from} -> {to}: {} (expanded {}, visited {}, abandoned {})",
            match &path {
                Some(p) => format!("path of {} cells", p.len()),
                None => "no path".to_string(),
            },
            self.stats.expanded,
            self.stats.visited,
            self.stats.abandoned,
        );
        path
    }
}
