//! Knight-distance search on the 8×8 board.
//!
//! The crate provides one breadth-first search, generic over the queue that
//! holds its frontier, and three interchangeable queue backends:
//!
//! - **array** — [`ArrayFrontier`], 64 preallocated slots and two indices
//! - **linked list** — [`LinkedFrontier`], one heap node per entry
//! - **deque** — [`DequeFrontier`], backed by `std::collections::VecDeque`
//!
//! All searches go through [`knight_distance`] (single target) or
//! [`distance_map`] (every square), both generic over the [`Frontier`]
//! trait. [`Backend`] names the three variants so callers can run or
//! benchmark them side by side.

mod backend;
mod bfs;
mod frontier;
mod neighbors;
mod node;
mod traits;
mod visited;

pub use backend::Backend;
pub use bfs::{DistanceMap, distance_map, knight_distance};
pub use frontier::{ArrayFrontier, CountingFrontier, DequeFrontier, LinkedFrontier};
pub use neighbors::{KNIGHT_OFFSETS, Neighbors, knight_moves};
pub use node::{SearchNode, UNREACHABLE};
pub use traits::Frontier;
pub use visited::VisitedSet;
