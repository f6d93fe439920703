use core::cmp::Ordering;
use core::mem;

use alloc::vec::Vec;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;

/// The core binary search tree backing `BalancedTree`.
///
/// All operations are iterative; the only stack-like structure is the
/// explicit range stack used by [`RawBst::build_from_sorted`], so tree
/// shape never translates into native call-stack depth.
///
/// Duplicate keys are allowed. Insertion sends an equal key to the right
/// subtree, so equal keys appear in in-order traversal in the order they
/// were inserted.
pub(crate) struct RawBst<K, V> {
    nodes: Arena<Node<K, V>>,
    root: Option<Handle>,
    len: usize,
}

impl<K, V> RawBst<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key and item of the node behind `handle`.
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (&node.key, &node.item)
    }

    /// Handle of the in-order first (minimum-key) node.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.min_from(root))
    }

    /// Handle of the in-order successor of `handle`.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(right) = node.right {
            return Some(self.min_from(right));
        }
        // Climb until we arrive from a left child; that parent is next.
        let mut current = handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = self.nodes.get(p);
            if parent_node.left == Some(current) {
                return Some(p);
            }
            current = p;
            parent = parent_node.parent;
        }
        None
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    fn min_from(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left {
            handle = left;
        }
        handle
    }

    /// Unlinks a node with at most one child, bypassing it from its parent.
    fn splice(&mut self, handle: Handle) {
        let (parent, child) = {
            let node = self.nodes.get(handle);
            debug_assert!(node.left.is_none() || node.right.is_none());
            (node.parent, node.left.or(node.right))
        };
        if let Some(c) = child {
            self.nodes.get_mut(c).parent = parent;
        }
        match parent {
            Some(p) => self.nodes.get_mut(p).replace_child(handle, child),
            None => self.root = child,
        }
    }

    /// Removes the node behind `handle`, returning its entry.
    ///
    /// Only the removed entry leaves the tree; when the node has two
    /// children its in-order successor is spliced into its place, which
    /// preserves the relative order of every remaining entry.
    pub(crate) fn remove(&mut self, handle: Handle) -> (K, V) {
        let (left, right) = {
            let node = self.nodes.get(handle);
            (node.left, node.right)
        };
        self.len -= 1;
        if left.is_some() && right.is_some() {
            // The successor is the leftmost node of the right subtree and
            // therefore has no left child, so it can be spliced out.
            let successor = self.min_from(right.expect("checked above"));
            self.splice(successor);
            let successor_node = self.nodes.take(successor);
            let node = self.nodes.get_mut(handle);
            let key = mem::replace(&mut node.key, successor_node.key);
            let item = mem::replace(&mut node.item, successor_node.item);
            (key, item)
        } else {
            self.splice(handle);
            let node = self.nodes.take(handle);
            (node.key, node.item)
        }
    }
}

impl<K: Ord, V> RawBst<K, V> {
    /// Ordinary BST insertion: O(height).
    pub(crate) fn insert(&mut self, key: K, item: V) {
        let Some(root) = self.root else {
            let handle = self.nodes.alloc(Node::new(key, item, None));
            self.root = Some(handle);
            self.len = 1;
            return;
        };
        let mut current = root;
        loop {
            let node = self.nodes.get(current);
            let go_left = key < node.key;
            let next = if go_left { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => {
                    let handle = self.nodes.alloc(Node::new(key, item, Some(current)));
                    let node = self.nodes.get_mut(current);
                    if go_left {
                        node.left = Some(handle);
                    } else {
                        node.right = Some(handle);
                    }
                    self.len += 1;
                    return;
                }
            }
        }
    }

    /// Finds some node with the given key: O(height).
    pub(crate) fn find(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Removes some node with the given key, returning its entry.
    ///
    /// Removing a key that is not present is a broken precondition and
    /// panics rather than silently doing nothing.
    pub(crate) fn remove_key(&mut self, key: &K) -> (K, V) {
        let handle = self.find(key).expect("`RawBst::remove_key()` - `key` is not in the tree!");
        self.remove(handle)
    }

    /// Builds a height-balanced tree from entries already in ascending
    /// key order.
    ///
    /// The midpoint `(start + end) / 2` of the remaining index range is
    /// inserted first (floor division: even-length ranges favor the lower
    /// half), then the two halves follow, left before right. Every
    /// insertion lands under an already-placed midpoint, which pins the
    /// height at `⌊log2 n⌋ + 1`.
    pub(crate) fn build_from_sorted(entries: Vec<(K, V)>) -> Self {
        let mut tree = Self {
            nodes: Arena::with_capacity(entries.len()),
            root: None,
            len: 0,
        };
        if entries.is_empty() {
            return tree;
        }
        let last = entries.len() - 1;
        let mut slots: Vec<Option<(K, V)>> = entries.into_iter().map(Some).collect();

        // Explicit range stack; the right half is pushed first so the
        // left half pops first, matching the recursive insertion order.
        let mut ranges: SmallVec<[(usize, usize); 32]> = SmallVec::new();
        ranges.push((0, last));
        while let Some((start, end)) = ranges.pop() {
            let mid = (start + end) / 2;
            let (key, item) = slots[mid].take().expect("`RawBst::build_from_sorted()` - range visited twice!");
            tree.insert(key, item);
            if mid < end {
                ranges.push((mid + 1, end));
            }
            if start < mid {
                ranges.push((start, mid - 1));
            }
        }
        tree
    }

    /// Walks the whole tree checking the BST ordering invariant, link
    /// symmetry, and the stored length.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.nodes.len(), self.len, "arena live count disagrees with len");
        if let Some(root) = self.root {
            assert!(self.nodes.get(root).parent.is_none(), "root has a parent");
        }

        let mut stack: SmallVec<[Handle; 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle);
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(self.nodes.get(child).parent, Some(handle), "child/parent link mismatch");
                stack.push(child);
            }
        }

        let mut count = 0;
        let mut previous: Option<Handle> = None;
        let mut current = self.first();
        while let Some(handle) = current {
            count += 1;
            if let Some(prev) = previous {
                assert!(self.nodes.get(prev).key <= self.nodes.get(handle).key, "in-order keys out of order");
            }
            previous = Some(handle);
            current = self.successor(handle);
        }
        assert_eq!(count, self.len, "in-order walk disagrees with len");
    }
}
