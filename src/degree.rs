//! Degree type and the golden-ratio degree bound of a Fibonacci heap.
//!
//! # Why u8?
//!
//! The degree of a node is its number of children. In a Fibonacci heap a node
//! of degree `k` roots a subtree of at least `F(k+2) ≥ φ^k` nodes, so with `n`
//! nodes no degree exceeds `⌊log_φ n⌋`. For `n = 2⁶⁴` that is 92; `u8`
//! leaves ample headroom while saving 7 bytes per node over `usize`.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the representable limit is reached, which
//! would indicate a broken linking step rather than a large heap.

/// Type alias for node degree.
pub type Degree = u8;

/// Maximum representable degree.
pub const MAX_DEGREE: Degree = u8::MAX;

/// Inline capacity of degree-indexed tables.
///
/// `max_degree(usize::MAX)` is 91 on 64-bit targets, so a table this long
/// never spills for any heap that fits in memory.
pub const TABLE_INLINE: usize = 96;

/// Safely increment a degree, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`.
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::degree::{checked_increment, Degree};
///
/// let degree: Degree = 5;
/// assert_eq!(checked_increment(degree), 6);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree
        .checked_add(1)
        .expect("degree overflow: a node's degree is bounded by log_φ(n)")
}

/// Decrement a degree, saturating at 0 (leaves have degree 0).
#[inline]
pub fn saturating_decrement(degree: Degree) -> Degree {
    degree.saturating_sub(1)
}

/// Largest degree any node can have in a Fibonacci heap of `n` nodes.
///
/// This is the largest `k` with `F(k+2) ≤ n`, which never exceeds
/// `⌊log_φ n⌋`. Returns 0 for empty and single-node heaps.
///
/// ```rust
/// use rust_fibonacci_heap::degree::max_degree;
///
/// assert_eq!(max_degree(1), 0);
/// assert_eq!(max_degree(2), 1);
/// assert_eq!(max_degree(4), 2);
/// assert_eq!(max_degree(5), 3);
/// ```
pub fn max_degree(n: usize) -> usize {
    // (a, b) = (F(k+2), F(k+3)), starting at k = 0
    let (mut a, mut b) = (1usize, 2usize);
    let mut k = 0;
    while b <= n {
        k += 1;
        match a.checked_add(b) {
            Some(next) => {
                a = b;
                b = next;
            }
            None => break,
        }
    }
    k
}

/// Initial length of the consolidation table for a heap of `n` nodes.
///
/// One slot per possible degree `0..=max_degree(n)`, plus one spare for the
/// link that may briefly push a tree past the bound before the removed
/// minimum is accounted for.
#[inline]
pub fn table_len(n: usize) -> usize {
    max_degree(n) + 2
}
