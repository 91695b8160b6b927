//! Common traits for heap data structures
//!
//! This module provides a three-tier trait hierarchy for priority queues
//! ordered by a totally ordered key:
//!
//! - [`Heap`]: Base trait for simple heaps (push, peek, pop)
//! - [`MergeableHeap`]: Heaps that can absorb another heap of the same type
//! - [`DecreaseKeyHeap`]: Handle-based operations (`decrease_key`, `erase`)
//!
//! The base [`Heap`] trait mirrors `std::collections::BinaryHeap`, except that
//! every heap here is a min-heap.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The heap has no elements (`get_min`/`extract_min` on an empty heap)
    EmptyHeap,
    /// The handle is default-constructed, already removed, or belongs to another heap
    InvalidHandle,
    /// The new key passed to `decrease_key` is greater than the current key
    InvalidArgument,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::InvalidHandle => {
                write!(f, "handle does not refer to an element of this heap")
            }
            HeapError::InvalidArgument => {
                write!(f, "new key is greater than current key")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap, used for `decrease_key` and `erase`
///
/// Handles are small opaque values. `Default::default()` yields a handle that
/// refers to nothing and is rejected by every operation.
pub trait Handle: Copy + Eq + Default + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::Heap;
/// use rust_fibonacci_heap::simple_binary::SimpleBinaryHeap;
///
/// let mut heap = SimpleBinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<K: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, O(1) amortized for the Fibonacci heap.
    fn push(&mut self, key: K);

    /// Returns the minimum key without removing it
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key
    ///
    /// # Time Complexity
    /// O(log n), amortized for the Fibonacci heap.
    fn pop(&mut self) -> Option<K>;
}

/// Heaps that support melding two instances into one
pub trait MergeableHeap<K: Ord>: Heap<K> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(1) amortized for the Fibonacci heap when `self` is empty, otherwise
    /// linear in `other`; O(n + m) for the binary heap.
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with `decrease_key` support
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::{DecreaseKeyHeap, Heap};
/// use rust_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.push_with_handle(10);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some(&5));
/// ```
pub trait DecreaseKeyHeap<K: Ord>: Heap<K> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts a key, returning a handle to it
    fn push_with_handle(&mut self, key: K) -> Self::Handle;

    /// Lowers the key of the element identified by `handle`
    ///
    /// Setting the same key again is allowed and succeeds.
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the handle does not refer to a live element
    /// - [`HeapError::InvalidArgument`] if `new_key` is greater than the current key
    ///
    /// No state changes when an error is returned.
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError>;

    /// Removes the element identified by `handle`, returning its key
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the handle does not refer to a live element.
    fn erase(&mut self, handle: &Self::Handle) -> Result<K, HeapError>;
}
