use crate::node::SearchNode;

/// FIFO queue holding the BFS frontier.
///
/// Implementations must hand nodes back from [`pop`](Self::pop) in exactly
/// the order they were given to [`push`](Self::push); the search relies on
/// that to expand squares layer by layer.
pub trait Frontier {
    /// Append `node` at the back.
    fn push(&mut self, node: SearchNode);

    /// Remove and return the oldest node, or `None` if the queue is empty.
    fn pop(&mut self) -> Option<SearchNode>;

    /// Whether no nodes are waiting.
    fn is_empty(&self) -> bool;

    /// Number of nodes waiting.
    fn len(&self) -> usize;
}

// Searches take their frontier by value; lending one lets the caller inspect
// it afterwards.
impl<F: Frontier> Frontier for &mut F {
    #[inline]
    fn push(&mut self, node: SearchNode) {
        (**self).push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        (**self).pop()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}
