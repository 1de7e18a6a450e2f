use std::collections::VecDeque;

use crate::node::SearchNode;
use crate::traits::Frontier;

/// Frontier backed by the standard library's growable ring buffer.
#[derive(Debug, Default)]
pub struct DequeFrontier {
    queue: VecDeque<SearchNode>,
}

impl DequeFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for DequeFrontier {
    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::test_support::{assert_fifo, assert_interleaved};

    #[test]
    fn fifo() {
        assert_fifo(DequeFrontier::new(), 64);
    }

    #[test]
    fn fifo_interleaved() {
        assert_interleaved(DequeFrontier::new());
    }
}
