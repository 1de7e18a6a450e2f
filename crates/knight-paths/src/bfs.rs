use knight_core::{SQUARE_COUNT, Square};

use crate::neighbors::Neighbors;
use crate::node::{SearchNode, UNREACHABLE};
use crate::traits::Frontier;
use crate::visited::VisitedSet;

/// Minimum number of knight moves from `start` to `end`.
///
/// Breadth-first search with `frontier` as the queue; `frontier` should be
/// empty and is consumed. Squares are marked visited before they are
/// enqueued, so each is pushed at most once and the search ends after at most
/// 64 pops. Returns [`UNREACHABLE`] if the frontier drains without reaching
/// `end`.
pub fn knight_distance<F: Frontier>(mut frontier: F, start: Square, end: Square) -> i32 {
    let mut visited = VisitedSet::new();

    visited.insert(start);
    frontier.push(SearchNode::new(start, 0));

    let mut nbuf = Neighbors::new();

    while let Some(current) = frontier.pop() {
        if current.square == end {
            log::trace!("{start} -> {end}: {} moves", current.dist);
            return current.dist;
        }
        for &next in nbuf.knight(current.square, |n| !visited.contains(n)) {
            visited.insert(next);
            frontier.push(SearchNode::new(next, current.dist + 1));
        }
    }

    log::trace!("{start} -> {end}: unreachable");
    UNREACHABLE
}

/// Knight distance from one source to every square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: Square,
    dist: [i32; SQUARE_COUNT],
}

impl DistanceMap {
    pub fn source(&self) -> Square {
        self.source
    }

    /// Distance to `sq`, or [`UNREACHABLE`].
    #[inline]
    pub fn at(&self, sq: Square) -> i32 {
        self.dist[sq.index()]
    }

    /// Number of squares the search reached, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// Largest finite distance in the map.
    pub fn max_distance(&self) -> i32 {
        self.dist.iter().copied().max().unwrap_or(UNREACHABLE)
    }

    /// `(square, distance)` for every reached square, rank-major.
    pub fn iter(&self) -> impl Iterator<Item = (Square, i32)> + '_ {
        Square::all()
            .map(|sq| (sq, self.at(sq)))
            .filter(|&(_, d)| d != UNREACHABLE)
    }
}

/// Breadth-first search from `source` until the frontier drains.
///
/// Same expansion rules as [`knight_distance`], without the early exit.
pub fn distance_map<F: Frontier>(mut frontier: F, source: Square) -> DistanceMap {
    let mut visited = VisitedSet::new();
    let mut dist = [UNREACHABLE; SQUARE_COUNT];

    visited.insert(source);
    frontier.push(SearchNode::new(source, 0));

    let mut nbuf = Neighbors::new();

    while let Some(current) = frontier.pop() {
        dist[current.square.index()] = current.dist;
        for &next in nbuf.knight(current.square, |n| !visited.contains(n)) {
            visited.insert(next);
            frontier.push(SearchNode::new(next, current.dist + 1));
        }
    }

    let map = DistanceMap { source, dist };
    log::trace!(
        "distance map from {source}: {} squares, eccentricity {}",
        map.reached(),
        map.max_distance()
    );
    map
}
