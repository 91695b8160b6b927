//! Circular doubly-linked lists threaded through a `slotmap` arena.
//!
//! This crate provides the ring primitives a Fibonacci-style heap needs, with
//! links stored as generational slotmap keys instead of raw pointers. A node
//! embeds a [`RingLink`] and exposes it through the [`Linked`] trait; the
//! operations in [`RingOps`] then rewire links inside a `SlotMap<K, N>`.
//!
//! # Circular vs Linear Lists
//!
//! In a circular list:
//! - A single node points to itself (both `left` and `right`)
//! - There is no head or tail - any node can be the "entry point"
//! - Splicing two rings together is O(1)
//! - Iteration wraps around (must track starting point)
//!
//! Because every link is a slotmap key, a node removed from the arena can never
//! be reached through a stale link: the slot version no longer matches and
//! indexing panics instead of reading freed memory.
//!
//! # Example
//!
//! ```rust
//! use slot_ring::{Linked, RingLink, RingOps};
//! use slotmap::{DefaultKey, SlotMap};
//!
//! struct Node {
//!     link: RingLink<DefaultKey>,
//!     value: i32,
//! }
//!
//! impl Linked<DefaultKey> for Node {
//!     fn link(&self) -> &RingLink<DefaultKey> {
//!         &self.link
//!     }
//!     fn link_mut(&mut self) -> &mut RingLink<DefaultKey> {
//!         &mut self.link
//!     }
//! }
//!
//! let mut nodes = SlotMap::new();
//! let a = nodes.insert_with_key(|k| Node { link: RingLink::singleton(k), value: 1 });
//! let b = nodes.insert_with_key(|k| Node { link: RingLink::singleton(k), value: 2 });
//!
//! let ops = RingOps::new();
//! ops.splice(&mut nodes, Some(a), Some(b));
//!
//! assert_eq!(ops.right(&nodes, a), b);
//! assert_eq!(ops.right(&nodes, b), a);
//! assert_eq!(ops.count(&nodes, a), 2);
//! ```

use slotmap::{Key, SlotMap};

// =============================================================================
// RingLink
// =============================================================================

/// The `left`/`right` pair a node carries to sit in a circular list.
///
/// There is no "unlinked" state: a freshly created link is a ring of one,
/// pointing at its own node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingLink<K: Key> {
    left: K,
    right: K,
}

impl<K: Key> RingLink<K> {
    /// Creates a link describing a ring containing only `this`.
    #[inline]
    pub fn singleton(this: K) -> Self {
        RingLink {
            left: this,
            right: this,
        }
    }

    /// Gets the left neighbour.
    #[inline]
    pub fn left(&self) -> K {
        self.left
    }

    /// Gets the right neighbour.
    #[inline]
    pub fn right(&self) -> K {
        self.right
    }

    #[inline]
    pub fn set_left(&mut self, left: K) {
        self.left = left;
    }

    #[inline]
    pub fn set_right(&mut self, right: K) {
        self.right = right;
    }
}

/// Access to the [`RingLink`] embedded in an arena node.
pub trait Linked<K: Key> {
    fn link(&self) -> &RingLink<K>;
    fn link_mut(&mut self) -> &mut RingLink<K>;
}

// =============================================================================
// RingOps
// =============================================================================

/// Operations for manipulating circular lists stored in a `SlotMap`.
///
/// All structural operations are O(1); only [`count`](RingOps::count) and
/// [`collect`](RingOps::collect) walk the ring.
///
/// # Panics
///
/// Every method indexes the arena with the keys it is given or finds in
/// links. Passing a key that is not live in `nodes` panics, which can only
/// happen if the caller broke the ring invariants.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingOps;

impl RingOps {
    /// Creates a new `RingOps`.
    #[inline]
    pub const fn new() -> Self {
        RingOps
    }

    /// Gets the left neighbour of `at`.
    #[inline]
    pub fn left<K: Key, N: Linked<K>>(&self, nodes: &SlotMap<K, N>, at: K) -> K {
        nodes[at].link().left()
    }

    /// Gets the right neighbour of `at`.
    #[inline]
    pub fn right<K: Key, N: Linked<K>>(&self, nodes: &SlotMap<K, N>, at: K) -> K {
        nodes[at].link().right()
    }

    /// Returns true if `at` is the only element of its ring.
    #[inline]
    pub fn is_singleton<K: Key, N: Linked<K>>(&self, nodes: &SlotMap<K, N>, at: K) -> bool {
        nodes[at].link().right() == at
    }

    /// Resets `at` into a ring of one, without touching its old neighbours.
    ///
    /// Only use this when the old ring is being discarded as a whole, or
    /// after `at` was already unlinked.
    #[inline]
    pub fn make_singleton<K: Key, N: Linked<K>>(&self, nodes: &mut SlotMap<K, N>, at: K) {
        *nodes[at].link_mut() = RingLink::singleton(at);
    }

    /// Removes `at` from its ring and leaves it as a singleton.
    ///
    /// Returns a remaining member of the old ring (the former right
    /// neighbour), or `None` if `at` was the only element.
    #[inline]
    pub fn remove<K: Key, N: Linked<K>>(&self, nodes: &mut SlotMap<K, N>, at: K) -> Option<K> {
        let RingLink { left, right } = *nodes[at].link();

        if right == at {
            return None;
        }

        nodes[left].link_mut().set_right(right);
        nodes[right].link_mut().set_left(left);
        self.make_singleton(nodes, at);
        Some(right)
    }

    /// Splices two circular lists together.
    ///
    /// After this operation, both rings are one ring. Returns an entry point
    /// into the merged ring; if either side is `None`, the other is returned
    /// unchanged.
    ///
    /// `a` and `b` must belong to different rings; splicing a ring with
    /// itself splits it instead.
    #[inline]
    pub fn splice<K: Key, N: Linked<K>>(
        &self,
        nodes: &mut SlotMap<K, N>,
        a: Option<K>,
        b: Option<K>,
    ) -> Option<K> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (Some(a), Some(b)) => {
                // Before:
                //   Ring A: ... <-> a_left <-> a <-> ...
                //   Ring B: ... <-> b_left <-> b <-> ...
                //
                // After:
                //   ... <-> a_left <-> b <-> ... <-> b_left <-> a <-> ...
                let a_left = nodes[a].link().left();
                let b_left = nodes[b].link().left();

                nodes[a].link_mut().set_left(b_left);
                nodes[b_left].link_mut().set_right(a);

                nodes[b].link_mut().set_left(a_left);
                nodes[a_left].link_mut().set_right(b);

                Some(a)
            }
        }
    }

    /// Counts the number of elements in the ring containing `start`.
    ///
    /// This is O(n) - use sparingly.
    pub fn count<K: Key, N: Linked<K>>(&self, nodes: &SlotMap<K, N>, start: K) -> usize {
        let mut count = 1;
        let mut current = nodes[start].link().right();

        while current != start {
            count += 1;
            current = nodes[current].link().right();
        }

        count
    }

    /// Snapshots the ring containing `start`, walking rightwards.
    pub fn collect<K: Key, N: Linked<K>>(&self, nodes: &SlotMap<K, N>, start: K) -> Vec<K> {
        let mut members = vec![start];
        let mut current = nodes[start].link().right();

        while current != start {
            members.push(current);
            current = nodes[current].link().right();
        }

        members
    }
}

// =============================================================================
// Tests
// =============================================================================
