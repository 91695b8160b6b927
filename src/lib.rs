//! Arena-backed Fibonacci heap for Rust
//!
//! This crate provides a mergeable min-priority queue with handle-based
//! `decrease_key` and `erase`, implemented as a Fibonacci heap whose nodes
//! live in a generational arena instead of behind raw pointers.
//!
//! # Features
//!
//! - **Fibonacci Heap**: O(1) amortized insert and decrease_key; O(log n)
//!   amortized extract-min and erase; O(1) merge into an empty heap
//! - **Checked handles**: stale, default, or foreign handles are reported as
//!   [`HeapError::InvalidHandle`] instead of causing undefined behaviour
//! - **Simple Binary Heap**: array-backed baseline without handles
//!
//! # Example
//!
//! ```rust
//! use rust_fibonacci_heap::fibonacci::FibonacciHeap;
//! use rust_fibonacci_heap::HeapError;
//!
//! let mut heap = FibonacciHeap::new();
//! let h100 = heap.insert(100);
//! heap.insert(200);
//! heap.insert(300);
//!
//! heap.decrease_key(&h100, 50)?;
//! assert_eq!(heap.get_min(), Ok(&50));
//! assert_eq!(heap.decrease_key(&h100, 60), Err(HeapError::InvalidArgument));
//!
//! assert_eq!(heap.extract_min(), Ok(50));
//! assert_eq!(heap.erase(&h100), Err(HeapError::InvalidHandle));
//! # Ok::<(), HeapError>(())
//! ```

pub mod degree;
pub mod fibonacci;
pub mod simple_binary;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{DecreaseKeyHeap, Handle, Heap, HeapError, MergeableHeap};
