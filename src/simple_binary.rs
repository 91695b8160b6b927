//! Simple Binary Heap implementation
//!
//! An array-backed binary min-heap implementing [`Heap`] and
//! [`MergeableHeap`] without handle support. It is the baseline the
//! Fibonacci heap is measured against: callers that need to lower a key
//! push a second copy instead ("lazy" decrease-key) and skip stale entries
//! when they pop.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `merge`   | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::Heap;
//! use rust_fibonacci_heap::simple_binary::SimpleBinaryHeap;
//!
//! let mut heap = SimpleBinaryHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::{Heap, MergeableHeap};

/// A simple binary min-heap of keys
#[derive(Debug, Clone)]
pub struct SimpleBinaryHeap<K: Ord> {
    data: Vec<K>,
}

impl<K: Ord> SimpleBinaryHeap<K> {
    /// Creates an empty heap with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from arbitrary keys in O(n).
    pub fn from_vec(data: Vec<K>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }

    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] >= self.data[parent] {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
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

impl<K: Ord> Heap<K> for SimpleBinaryHeap<K> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, key: K) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&K> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<K> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();
        self.sift_down(0);
        min
    }
}

impl<K: Ord> MergeableHeap<K> for SimpleBinaryHeap<K> {
    fn merge(&mut self, other: Self) {
        if other.data.len() > self.data.len() / 2 {
            self.data.extend(other.data);
            self.rebuild();
        } else {
            for key in other.data {
                self.push(key);
            }
        }
    }
}

impl<K: Ord> Default for SimpleBinaryHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
