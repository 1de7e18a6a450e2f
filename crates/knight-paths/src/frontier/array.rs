use knight_core::SQUARE_COUNT;

use crate::node::SearchNode;
use crate::traits::Frontier;

/// Frontier stored in a fixed block of 64 slots.
///
/// `front` and `rear` only ever grow; slots are never reused. That is enough
/// because a search enqueues each square at most once, so 64 pushes is the
/// most any search on the board can make.
pub struct ArrayFrontier {
    slots: [Option<SearchNode>; SQUARE_COUNT],
    front: usize,
    rear: usize,
}

impl Default for ArrayFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayFrontier {
    /// Total number of pushes this frontier accepts over its lifetime.
    pub const CAPACITY: usize = SQUARE_COUNT;

    pub fn new() -> Self {
        Self {
            slots: [None; SQUARE_COUNT],
            front: 0,
            rear: 0,
        }
    }
}

impl Frontier for ArrayFrontier {
    /// # Panics
    ///
    /// Panics on the 65th push, even if earlier nodes were popped.
    #[inline]
    fn push(&mut self, node: SearchNode) {
        assert!(
            self.rear < Self::CAPACITY,
            "ArrayFrontier capacity of {} pushes exceeded",
            Self::CAPACITY
        );
        self.slots[self.rear] = Some(node);
        self.rear += 1;
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        if self.front == self.rear {
            return None;
        }
        let node = self.slots[self.front].take();
        self.front += 1;
        node
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    #[inline]
    fn len(&self) -> usize {
        self.rear - self.front
    }
}
