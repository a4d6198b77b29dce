//! Random maze generation for demos.

use dfsmaze_core::{Maze, Point, Tile};
use dfsmaze_paths::find_path;
use rand::Rng;

/// Maze generator scattering walls uniformly at random.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` maze where each tile is a wall with
    /// probability `wall_pct`% (clamped to 0–100).
    ///
    /// Cells in `keep_free` are always free.
    pub fn random_maze(
        &mut self,
        rows: i32,
        cols: i32,
        wall_pct: u32,
        keep_free: &[Point],
    ) -> Maze {
        let p = f64::from(wall_pct.min(100)) / 100.0;
        let rng = &mut self.rng;
        Maze::from_fn(rows, cols, |pos| {
            let wall = rng.random_bool(p);
            if wall && !keep_free.contains(&pos) {
                Tile::Blocked
            } else {
                Tile::Free
            }
        })
    }

    /// Generate random mazes until one connects `start` and `goal`.
    ///
    /// Gives up and returns `None` after `attempts` mazes.
    pub fn solvable_maze(
        &mut self,
        rows: i32,
        cols: i32,
        wall_pct: u32,
        start: Point,
        goal: Point,
        attempts: usize,
    ) -> Option<Maze> {
        for attempt in 1..=attempts {
            let maze = self.random_maze(rows, cols, wall_pct, &[start, goal]);
            if find_path(&maze, start, goal).is_some() {
                log::debug!("mapgen: solvable maze after {attempt} attempt(s)");
                return Some(maze);
            }
        }
        log::debug!("mapgen: no solvable maze in {attempts} attempts");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn wall_percentage_extremes() {
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(7));
        let open = mg.random_maze(6, 6, 0, &[]);
        assert_eq!(open.count(Tile::Blocked), 0);

        let keep = [Point::new(0, 0), Point::new(5, 5)];
        let solid = mg.random_maze(6, 6, 100, &keep);
        assert_eq!(solid.count(Tile::Free), 2);
        assert!(solid.is_free(Point::new(0, 0)));
        assert!(solid.is_free(Point::new(5, 5)));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGen::with_rng(StdRng::seed_from_u64(42)).random_maze(8, 8, 30, &[]);
        let b = MazeGen::with_rng(StdRng::seed_from_u64(42)).random_maze(8, 8, 30, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn solvable_maze_has_path() {
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(3));
        let (start, goal) = (Point::new(0, 0), Point::new(9, 9));
        let maze = mg.solvable_maze(10, 10, 25, start, goal, 200).unwrap();
        assert!(find_path(&maze, start, goal).is_some());
    }

    #[test]
    fn solvable_maze_gives_up() {
        let mut mg = MazeGen::with_rng(StdRng::seed_from_u64(3));
        // Fully walled apart from the endpoints, which are not adjacent.
        let maze = mg.solvable_maze(4, 4, 100, Point::new(0, 0), Point::new(3, 3), 5);
        assert!(maze.is_none());
    }
}
