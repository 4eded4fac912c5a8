//! Binary min-heap with an injected comparator.
//!
//! Elements live in a 0-indexed `Vec` with the usual implicit layout:
//! `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`.
//! The comparator is the only source of ordering, so the same heap type
//! serves `(cost, node)` pairs, plain integers, or anything else. Equal
//! elements come back in an unspecified relative order.

use std::cmp::Ordering;
use std::fmt;

/// Min-heap ordered by a caller-supplied comparator.
pub struct MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    data: Vec<T>,
    compare: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `compare`.
    pub fn new(compare: F) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Insert an element. Duplicates are kept.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.bubble_up(self.data.len() - 1);
    }

    /// Remove and return the minimum element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }

        let root = self.data.swap_remove(0);
        self.bubble_down(0);
        Some(root)
    }

    /// Observe the minimum element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consume the heap, returning its elements in internal (heap) order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, F> fmt::Debug for MinHeap<T, F>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
