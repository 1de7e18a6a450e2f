use std::ptr;

use crate::node::SearchNode;
use crate::traits::Frontier;

struct Node<T> {
    data: T,
    next: *mut Node<T>,
}

/// Singly linked FIFO of individually boxed nodes.
///
/// Pushes append at `tail`, pops unlink at `head`. Each node is allocated on
/// push and freed on the pop that returns it; whatever is still queued is
/// freed on drop.
struct LinkedQueue<T> {
    // Both null, or both point at nodes owned by this list (head reaches
    // tail through `next`).
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    fn new() -> Self {
        Self {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    fn push_back(&mut self, data: T) {
        let new = Box::into_raw(Box::new(Node {
            data,
            next: ptr::null_mut(),
        }));
        if self.tail.is_null() {
            self.head = new;
        } else {
            // SAFETY: a non-null tail is a live node owned by this list.
            unsafe { (*self.tail).next = new };
        }
        self.tail = new;
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        // SAFETY: head came from `Box::into_raw` in `push_back` and is
        // unlinked here before anything else can reach it, so it is freed once.
        let boxed = unsafe { Box::from_raw(self.head) };
        self.head = boxed.next;
        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Some(boxed.data)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_null()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        // Iterative, so a long list cannot overflow the stack.
        while self.pop_front().is_some() {}
    }
}

/// Frontier kept as a singly linked list, one heap node per queued entry.
pub struct LinkedFrontier {
    list: LinkedQueue<SearchNode>,
}

impl Default for LinkedFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedFrontier {
    pub fn new() -> Self {
        Self {
            list: LinkedQueue::new(),
        }
    }
}

impl Frontier for LinkedFrontier {
    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.list.push_back(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.list.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len
    }
}
