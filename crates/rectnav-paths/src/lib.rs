//! Pathfinding over rectangular navigation meshes.
//!
//! Given a mesh of axis-aligned rectangular cells with a symmetric
//! adjacency relation (see `rectnav-core`), this crate computes a feasible
//! waypoint path between two points of the plane:
//!
//! - **Point location** ([`locate`]) resolves each endpoint to the cell
//!   containing it.
//! - **Bidirectional best-first search** ([`PathFinder::find_path`]) runs
//!   one frontier from each endpoint cell until they meet.
//! - **Reconstruction** stitches the discovered cell chain into waypoints:
//!   the exact endpoints around one boundary-constrained midpoint per
//!   shared edge.
//!
//! All queries go through [`PathFinder`], which owns and reuses its search
//! arenas so that repeated queries incur no allocations beyond the returned
//! [`SearchOutcome`].

mod bidirectional;
mod distance;
mod finder;
mod locate;
mod reconstruct;
mod traits;

pub use distance::euclidean;
pub use finder::{PathError, PathFinder, SearchOutcome};
pub use locate::locate;
pub use traits::CellGraph;
