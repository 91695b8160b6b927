//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a forest of heap-ordered trees whose roots form a
//! circular doubly linked list. Work is deferred: insert and merge only splice
//! root lists, and the forest is only compacted when the minimum is removed.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `insert`       | O(1)               |
//! | `get_min`      | O(1)               |
//! | `extract_min`  | O(log n) amortized |
//! | `decrease_key` | O(1) amortized     |
//! | `erase`        | O(log n) amortized |
//! | `append`       | O(1) into an empty heap, otherwise O(m) for m moved nodes |
//!
//! The amortized bounds follow from the potential Φ = trees + 2 · marked nodes.
//!
//! # Storage
//!
//! Nodes live in a `slotmap` arena owned by the heap, and every link
//! (`parent`, `child`, and the sibling ring) is a generational key. Handles
//! carry the key plus the identity of the issuing heap, so stale handles,
//! default handles, and handles from other heaps are all detected and rejected
//! with [`HeapError::InvalidHandle`] before anything is modified.

use crate::degree::{self, Degree};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError, MergeableHeap};
use slot_ring::{Linked, RingLink, RingOps};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

const RING: RingOps = RingOps::new();

new_key_type! {
    /// Arena key of a heap node
    struct NodeKey;
}

/// Identity of a heap instance; 0 is never issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
struct HeapId(u64);

impl HeapId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        HeapId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to an element in a Fibonacci heap
///
/// A handle stays valid while its element is in the heap that issued it.
/// `FibonacciHandle::default()` refers to nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FibonacciHandle {
    owner: HeapId,
    node: Option<NodeKey>,
}

impl Handle for FibonacciHandle {}

#[derive(Clone)]
struct Node<K> {
    key: K,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    link: RingLink<NodeKey>,
    degree: Degree,
    marked: bool,
}

impl<K> Node<K> {
    fn new(key: K, this: NodeKey) -> Self {
        Node {
            key,
            parent: None,
            child: None,
            link: RingLink::singleton(this),
            degree: 0,
            marked: false,
        }
    }
}

impl<K> Linked<NodeKey> for Node<K> {
    fn link(&self) -> &RingLink<NodeKey> {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RingLink<NodeKey> {
        &mut self.link
    }
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use rust_fibonacci_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(100);
/// heap.insert(200);
/// heap.decrease_key(&handle, 50).unwrap();
/// assert_eq!(heap.get_min(), Ok(&50));
/// assert_eq!(heap.extract_min(), Ok(50));
/// assert_eq!(heap.len(), 1);
/// ```
pub struct FibonacciHeap<K: Ord> {
    nodes: SlotMap<NodeKey, Node<K>>,
    min: Option<NodeKey>,
    id: HeapId,
}

impl<K: Ord> FibonacciHeap<K> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty heap whose arena can hold `capacity` nodes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            min: None,
            id: HeapId::fresh(),
        }
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Inserts `key` as a new single-node tree and returns its handle.
    pub fn insert(&mut self, key: K) -> FibonacciHandle {
        let node = self.nodes.insert_with_key(|this| Node::new(key, this));
        self.add_root(node);
        FibonacciHandle {
            owner: self.id,
            node: Some(node),
        }
    }

    /// Returns the minimum key.
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn get_min(&self) -> Result<&K, HeapError> {
        self.min
            .map(|min| &self.nodes[min].key)
            .ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum key.
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn extract_min(&mut self) -> Result<K, HeapError> {
        let min = self.min.ok_or(HeapError::EmptyHeap)?;
        Ok(self.remove_root(min))
    }

    /// Lowers the key of the element behind `handle` to `new_key`.
    ///
    /// `new_key` equal to the current key is accepted.
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if `handle` is not a live element of this heap
    /// - [`HeapError::InvalidArgument`] if `new_key` is greater than the current key
    pub fn decrease_key(&mut self, handle: &FibonacciHandle, new_key: K) -> Result<(), HeapError> {
        let x = self.resolve(handle)?;
        if new_key > self.nodes[x].key {
            return Err(HeapError::InvalidArgument);
        }

        self.nodes[x].key = new_key;

        if let Some(y) = self.nodes[x].parent {
            if self.nodes[x].key < self.nodes[y].key {
                self.cut(x, y);
                self.cascading_cut(y);
            }
        }

        if let Some(min) = self.min {
            if self.nodes[x].key < self.nodes[min].key {
                self.min = Some(x);
            }
        }
        Ok(())
    }

    /// Removes the element behind `handle` and returns its key.
    ///
    /// The node is cut loose from its parent (with the usual cascading cuts)
    /// and then removed exactly like the minimum, so no sentinel key is needed.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if `handle` is not a live element of this heap.
    pub fn erase(&mut self, handle: &FibonacciHandle) -> Result<K, HeapError> {
        let x = self.resolve(handle)?;
        if let Some(y) = self.nodes[x].parent {
            self.cut(x, y);
            self.cascading_cut(y);
        }
        Ok(self.remove_root(x))
    }

    /// Moves every element of `other` into `self`, leaving `other` empty.
    ///
    /// If `self` is empty the two heaps trade contents in O(1) and every
    /// handle issued by `other` keeps working on `self`. Otherwise `other`'s
    /// nodes are moved into this heap's arena and handles issued by `other`
    /// become invalid.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        if self.is_empty() {
            std::mem::swap(self, other);
            other.id = HeapId::fresh();
            return;
        }

        let mut remap: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(other.len());
        for (old, node) in other.nodes.drain() {
            remap.insert(old, self.nodes.insert(node));
        }
        for (_, &moved) in remap.iter() {
            let node = &mut self.nodes[moved];
            node.parent = node.parent.map(|p| remap[p]);
            node.child = node.child.map(|c| remap[c]);
            let (left, right) = (remap[node.link.left()], remap[node.link.right()]);
            node.link.set_left(left);
            node.link.set_right(right);
        }

        let other_min = other.min.take().map(|m| remap[m]);
        RING.splice(&mut self.nodes, self.min, other_min);
        if let (Some(min), Some(candidate)) = (self.min, other_min) {
            if self.nodes[candidate].key < self.nodes[min].key {
                self.min = Some(candidate);
            }
        }
        other.id = HeapId::fresh();
    }

    /// Returns true if `handle` refers to an element currently in this heap.
    pub fn contains(&self, handle: &FibonacciHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Returns the current key of the element behind `handle`.
    pub fn key_of(&self, handle: &FibonacciHandle) -> Result<&K, HeapError> {
        self.resolve(handle).map(|node| &self.nodes[node].key)
    }

    /// Removes every element. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
    }

    /// Number of trees in the root list.
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| RING.count(&self.nodes, min))
    }

    /// Checks the structural invariants of the forest.
    ///
    /// Verifies that every sibling ring is doubly linked, parent pointers and
    /// degrees agree with the child rings, keys are heap-ordered, roots are
    /// unmarked, `min` is the smallest root, degrees respect the golden-ratio
    /// bound, and exactly `len()` nodes are reachable.
    pub fn verify_internal_structure(&self) -> bool {
        self.structure_violation().is_none()
    }

    fn structure_violation(&self) -> Option<&'static str> {
        let Some(min) = self.min else {
            return (!self.nodes.is_empty()).then_some("min is absent but nodes remain");
        };
        let bound = degree::max_degree(self.nodes.len());
        let mut visited = 0usize;
        let mut rings = vec![(min, None::<NodeKey>)];

        while let Some((start, parent)) = rings.pop() {
            let mut current = start;
            let mut members = 0usize;
            loop {
                let Some(node) = self.nodes.get(current) else {
                    return Some("link to a removed node");
                };
                let right = RING.right(&self.nodes, current);
                if !self.nodes.contains_key(right) || RING.left(&self.nodes, right) != current {
                    return Some("sibling ring is not doubly linked");
                }
                if node.parent != parent {
                    return Some("parent pointer disagrees with child ring");
                }
                match parent {
                    None if node.marked => return Some("root is marked"),
                    None if node.key < self.nodes[min].key => return Some("min is not the smallest root"),
                    Some(p) if node.key < self.nodes[p].key => return Some("heap order violated"),
                    _ => {}
                }
                if usize::from(node.degree) > bound {
                    return Some("degree exceeds the golden-ratio bound");
                }
                match node.child {
                    Some(child) => rings.push((child, Some(current))),
                    None if node.degree != 0 => return Some("childless node has nonzero degree"),
                    None => {}
                }

                visited += 1;
                members += 1;
                if visited > self.nodes.len() {
                    return Some("more reachable nodes than len");
                }
                current = right;
                if current == start {
                    break;
                }
            }
            if let Some(p) = parent {
                if usize::from(self.nodes[p].degree) != members {
                    return Some("degree differs from child count");
                }
            }
        }

        (visited != self.nodes.len()).then_some("arena holds unreachable nodes")
    }

    fn resolve(&self, handle: &FibonacciHandle) -> Result<NodeKey, HeapError> {
        match handle.node {
            Some(node) if handle.owner == self.id && self.nodes.contains_key(node) => Ok(node),
            _ => Err(HeapError::InvalidHandle),
        }
    }

    /// Splices the singleton root `x` into the root list and updates `min`.
    fn add_root(&mut self, x: NodeKey) {
        self.min = match self.min {
            None => Some(x),
            Some(min) => {
                RING.splice(&mut self.nodes, Some(min), Some(x));
                if self.nodes[x].key < self.nodes[min].key {
                    Some(x)
                } else {
                    Some(min)
                }
            }
        };
    }

    /// Removes root `z` from the forest and returns its key.
    ///
    /// Children are promoted to the root list, then the remaining roots are
    /// consolidated, which also recomputes `min`.
    fn remove_root(&mut self, z: NodeKey) -> K {
        if let Some(child) = self.nodes[z].child.take() {
            let mut current = child;
            loop {
                let node = &mut self.nodes[current];
                node.parent = None;
                node.marked = false;
                current = RING.right(&self.nodes, current);
                if current == child {
                    break;
                }
            }
            RING.splice(&mut self.nodes, Some(z), Some(child));
        }

        match RING.remove(&mut self.nodes, z) {
            None => self.min = None,
            Some(survivor) => {
                self.min = Some(survivor);
                self.consolidate(survivor);
            }
        }

        self.nodes
            .remove(z)
            .expect("removed root must still be in the arena")
            .key
    }

    /// Links roots of equal degree until every degree occurs at most once,
    /// then rebuilds the root list and `min`.
    fn consolidate(&mut self, start: NodeKey) {
        // Break the shared ring first; linking rewrites sibling pointers.
        let roots = RING.collect(&self.nodes, start);
        for &root in &roots {
            RING.make_singleton(&mut self.nodes, root);
        }

        let mut table: SmallVec<[Option<NodeKey>; degree::TABLE_INLINE]> =
            SmallVec::from_elem(None, degree::table_len(self.nodes.len()));

        for root in roots {
            let mut x = root;
            let mut d = usize::from(self.nodes[x].degree);
            loop {
                if d >= table.len() {
                    table.resize(d + 1, None);
                }
                let Some(y) = table[d].take() else {
                    break;
                };
                // On equal keys the tree being processed stays on top.
                let (parent, child) = if self.nodes[x].key > self.nodes[y].key {
                    (y, x)
                } else {
                    (x, y)
                };
                self.link(child, parent);
                x = parent;
                d += 1;
            }
            table[d] = Some(x);
        }

        self.min = None;
        for root in table.into_iter().flatten() {
            let node = &mut self.nodes[root];
            node.parent = None;
            node.marked = false;
            RING.make_singleton(&mut self.nodes, root);
            self.add_root(root);
        }
    }

    /// Makes the singleton root `child` a child of `parent`.
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        debug_assert!(RING.is_singleton(&self.nodes, child), "linked root is still in a ring");
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.marked = false;

        let siblings = self.nodes[parent].child;
        let entry = RING.splice(&mut self.nodes, siblings, Some(child));

        let node = &mut self.nodes[parent];
        node.child = entry;
        node.degree = degree::checked_increment(node.degree);
    }

    /// Detaches `x` from its parent `y` and makes it an unmarked root.
    fn cut(&mut self, x: NodeKey, y: NodeKey) {
        let rest = RING.remove(&mut self.nodes, x);

        let parent = &mut self.nodes[y];
        if parent.child == Some(x) {
            parent.child = rest;
        }
        parent.degree = degree::saturating_decrement(parent.degree);

        let node = &mut self.nodes[x];
        node.parent = None;
        node.marked = false;
        self.add_root(x);
    }

    /// Walks up from `y`, cutting every marked ancestor until it reaches a
    /// root or an unmarked node, which gets marked.
    fn cascading_cut(&mut self, mut y: NodeKey) {
        while let Some(z) = self.nodes[y].parent {
            if !self.nodes[y].marked {
                self.nodes[y].marked = true;
                return;
            }
            self.cut(y, z);
            y = z;
        }
    }
}

impl<K: Ord> Default for FibonacciHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning copies the forest but not the identity: handles issued by the
/// original are not valid on the clone.
impl<K: Ord + Clone> Clone for FibonacciHeap<K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            min: self.min,
            id: HeapId::fresh(),
        }
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for FibonacciHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len())
            .field("min", &self.get_min().ok())
            .field("roots", &self.root_count())
            .finish()
    }
}

impl<K: Ord> Heap<K> for FibonacciHeap<K> {
    fn new() -> Self {
        FibonacciHeap::with_capacity(0)
    }

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, key: K) {
        self.insert(key);
    }

    fn peek(&self) -> Option<&K> {
        self.get_min().ok()
    }

    fn pop(&mut self) -> Option<K> {
        self.extract_min().ok()
    }
}

impl<K: Ord> MergeableHeap<K> for FibonacciHeap<K> {
    fn merge(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<K: Ord> DecreaseKeyHeap<K> for FibonacciHeap<K> {
    type Handle = FibonacciHandle;

    fn push_with_handle(&mut self, key: K) -> Self::Handle {
        self.insert(key)
    }

    fn decrease_key(&mut self, handle: &Self::Handle, new_key: K) -> Result<(), HeapError> {
        FibonacciHeap::decrease_key(self, handle, new_key)
    }

    fn erase(&mut self, handle: &Self::Handle) -> Result<K, HeapError> {
        FibonacciHeap::erase(self, handle)
    }
}
