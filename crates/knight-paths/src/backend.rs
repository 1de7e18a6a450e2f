use std::fmt;

use knight_core::Square;

use crate::bfs::knight_distance;
use crate::frontier::{ArrayFrontier, CountingFrontier, DequeFrontier, LinkedFrontier};
use crate::traits::Frontier;

/// The three frontier implementations, as a value the harness can iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Array,
    Linked,
    Deque,
}

impl Backend {
    /// Every backend, in reporting order.
    pub const ALL: [Backend; 3] = [Backend::Array, Backend::Linked, Backend::Deque];

    /// Human-readable label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Backend::Array => "array",
            Backend::Linked => "linked list",
            Backend::Deque => "VecDeque",
        }
    }

    /// Run [`knight_distance`] on a fresh frontier of this kind.
    pub fn distance(self, start: Square, end: Square) -> i32 {
        match self {
            Backend::Array => knight_distance(ArrayFrontier::new(), start, end),
            Backend::Linked => knight_distance(LinkedFrontier::new(), start, end),
            Backend::Deque => knight_distance(DequeFrontier::new(), start, end),
        }
    }

    /// Like [`distance`](Self::distance), also returning how many nodes were
    /// enqueued.
    pub fn distance_counted(self, start: Square, end: Square) -> (i32, usize) {
        match self {
            Backend::Array => counted(ArrayFrontier::new(), start, end),
            Backend::Linked => counted(LinkedFrontier::new(), start, end),
            Backend::Deque => counted(DequeFrontier::new(), start, end),
        }
    }
}

fn counted<F: Frontier>(inner: F, start: Square, end: Square) -> (i32, usize) {
    let mut f = CountingFrontier::new(inner);
    let d = knight_distance(&mut f, start, end);
    (d, f.pushes())
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_backends_agree_on_fixed_input() {
        let a1: Square = "A1".parse().unwrap();
        let h8: Square = "H8".parse().unwrap();
        for b in Backend::ALL {
            assert_eq!(b.distance(a1, h8), 6, "{b}");
            let (d, pushes) = b.distance_counted(a1, h8);
            assert_eq!(d, 6);
            assert!(pushes > 0 && pushes <= 64);
        }
    }

    #[test]
    fn push_counts_match_across_backends() {
        let a1: Square = "A1".parse().unwrap();
        let b1: Square = "B1".parse().unwrap();
        let counts: Vec<usize> = Backend::ALL
            .iter()
            .map(|b| b.distance_counted(a1, b1).1)
            .collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]), "{counts:?}");
    }

    #[test]
    fn names() {
        assert_eq!(Backend::Array.to_string(), "array");
        assert_eq!(Backend::Linked.name(), "linked list");
        assert_eq!(Backend::Deque.name(), "VecDeque");
    }
}
