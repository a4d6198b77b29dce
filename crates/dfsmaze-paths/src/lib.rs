//! Depth-first pathfinding on maze grids.
//!
//! The search is a stack-based DFS over orthogonal moves with a fixed
//! neighbour order (up, down, left, right). Cells are marked visited when
//! they are pushed, and the search stops as soon as the goal is popped. The
//! resulting path is deterministic for a given maze but is **not** a
//! shortest path.
//!
//! - [`find_path`] is the pure entry point: it allocates fresh search state
//!   on every call.
//! - [`PathRange::dfs_path`] runs the same search with reusable buffers and
//!   keeps the search state ([`PathRange::stats`], [`PathRange::parents`],
//!   [`PathRange::visited_at`]) around for inspection.
//! - [`reconstruct`] rebuilds a path from a [`ParentMap`] on its own.
//! - [`check_path`] verifies that a path is a walk of orthogonal steps over
//!   free cells.

mod check;
mod dfs;
mod distance;
mod neighbors;
mod parents;
mod pathrange;
mod traits;

pub use check::{PathError, check_path};
pub use dfs::find_path;
pub use distance::{is_step, manhattan};
pub use neighbors::Neighbors;
pub use parents::{ParentMap, reconstruct};
pub use pathrange::{PathRange, SearchStats};
pub use traits::Pather;
