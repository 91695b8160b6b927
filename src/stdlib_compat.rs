//! Standard library compatibility layer
//!
//! Collection traits that let a [`FibonacciHeap`] be built and consumed the
//! way `std::collections::BinaryHeap` is.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: [`FibonacciHeap`] yields its smallest key first.
//!   Use `std::cmp::Reverse<K>` for max-heap behaviour.
//! - **Iteration is ordered**: there is no unordered `iter()`; consuming the
//!   heap with `into_iter()` or [`into_sorted_vec`](FibonacciHeap::into_sorted_vec)
//!   yields keys in ascending order.
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::fibonacci::FibonacciHeap;
//!
//! let mut heap: FibonacciHeap<i32> = [5, 3, 7].into_iter().collect();
//! heap.extend([1, 9]);
//! assert_eq!(heap.get_min(), Ok(&1));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 7, 9]);
//! ```

use crate::fibonacci::FibonacciHeap;
use std::iter::FusedIterator;

/// Consuming iterator over a [`FibonacciHeap`], yielding keys in ascending
/// order. Each step is an `extract_min`.
#[derive(Debug)]
pub struct IntoSorted<K: Ord> {
    heap: FibonacciHeap<K>,
}

impl<K: Ord> Iterator for IntoSorted<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K: Ord> ExactSizeIterator for IntoSorted<K> {}

impl<K: Ord> FusedIterator for IntoSorted<K> {}

impl<K: Ord> IntoIterator for FibonacciHeap<K> {
    type Item = K;
    type IntoIter = IntoSorted<K>;

    fn into_iter(self) -> IntoSorted<K> {
        IntoSorted { heap: self }
    }
}

impl<K: Ord> FibonacciHeap<K> {
    /// Consumes the heap and returns its keys in ascending order.
    pub fn into_sorted_vec(self) -> Vec<K> {
        self.into_iter().collect()
    }
}

impl<K: Ord> FromIterator<K> for FibonacciHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = FibonacciHeap::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<K: Ord> Extend<K> for FibonacciHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;

    #[test]
    fn test_collect_and_drain() {
        let heap: FibonacciHeap<i32> = vec![4, 1, 3, 1, 2].into_iter().collect();
        assert_eq!(heap.len(), 5);

        let mut sorted = heap.into_iter();
        assert_eq!(sorted.len(), 5);
        assert_eq!(sorted.next(), Some(1));
        assert_eq!(sorted.len(), 4);
        assert_eq!(sorted.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_extend_keeps_existing_handles() {
        let mut heap = FibonacciHeap::new();
        let h = heap.insert(10);
        heap.extend(20..25);

        heap.decrease_key(&h, 0).unwrap();
        assert_eq!(heap.into_sorted_vec(), vec![0, 20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_reverse_gives_max_heap() {
        let heap: FibonacciHeap<Reverse<i32>> = [2, 9, 4].into_iter().map(Reverse).collect();
        let keys: Vec<i32> = heap.into_iter().map(|Reverse(k)| k).collect();
        assert_eq!(keys, vec![9, 4, 2]);
    }

    #[test]
    fn test_empty_iterator_is_fused() {
        let mut sorted = FibonacciHeap::<u8>::new().into_iter();
        assert_eq!(sorted.next(), None);
        assert_eq!(sorted.next(), None);
    }
}
