use crate::node::SearchNode;
use crate::traits::Frontier;

/// Wraps a frontier and counts every push that goes through it.
#[derive(Debug, Default)]
pub struct CountingFrontier<F> {
    inner: F,
    pushes: usize,
}

impl<F: Frontier> CountingFrontier<F> {
    pub fn new(inner: F) -> Self {
        Self { inner, pushes: 0 }
    }
}

impl<F> CountingFrontier<F> {
    /// Pushes seen so far.
    pub fn pushes(&self) -> usize {
        self.pushes
    }
}

impl<F: Frontier> Frontier for CountingFrontier<F> {
    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.pushes += 1;
        self.inner.push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.inner.pop()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use knight_core::Square;

    use super::*;
    use crate::frontier::DequeFrontier;

    #[test]
    fn counts_pushes_not_pops() {
        let mut f = CountingFrontier::new(DequeFrontier::new());
        let a1: Square = "A1".parse().unwrap();
        f.push(SearchNode::new(a1, 0));
        f.push(SearchNode::new(a1, 1));
        f.pop();
        assert_eq!(f.pushes(), 2);
        assert_eq!(f.len(), 1);
    }

    fn push_one<G: Frontier>(mut g: G) {
        g.push(SearchNode::new("C3".parse().unwrap(), 0));
    }

    #[test]
    fn count_survives_lending_by_reference() {
        let mut f = CountingFrontier::new(DequeFrontier::new());
        push_one(&mut f);
        push_one(&mut f);
        assert_eq!(f.pushes(), 2);
        assert_eq!(f.len(), 2);
    }
}
