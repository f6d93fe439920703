//! Array-backed binary max-heap over keyed entries.

use alloc::vec::Vec;

/// An array-backed binary max-heap of `(key, item)` entries.
///
/// The layout is the classic dense 0-indexed array: `parent(i) = (i-1)/2`,
/// children at `2i+1` and `2i+2`, with every parent key ≥ both child keys.
/// [`heapify`](MaxHeap::heapify) bulk-builds in O(n);
/// [`push`](MaxHeap::push) and [`pop_max`](MaxHeap::pop_max) are O(log n).
///
/// # Examples
///
/// ```
/// use hollow_maze::MaxHeap;
///
/// let mut heap = MaxHeap::heapify(vec![(2, 'b'), (9, 'z'), (4, 'd')]);
/// assert_eq!(heap.pop_max(), (9, 'z'));
/// assert_eq!(heap.peek_max(), Some((&4, &'d')));
/// ```
pub struct MaxHeap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> MaxHeap<K, V> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Bulk-builds a heap from entries in any order: O(n).
    ///
    /// Sifts down every internal node from the last parent up to the
    /// root; the summed sift distances are bounded by the node count,
    /// which is what makes this linear rather than n log n.
    #[must_use]
    pub fn heapify(entries: Vec<(K, V)>) -> Self {
        let mut heap = Self { entries };
        for index in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// Number of entries in the heap.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum-key entry, without removing it.
    #[must_use]
    pub fn peek_max(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, item)| (key, item))
    }

    /// Inserts an entry: O(log n).
    pub fn push(&mut self, key: K, item: V) {
        self.entries.push((key, item));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the maximum-key entry: O(log n).
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty — extracting from an empty heap is a
    /// broken precondition, not an expected outcome. Check
    /// [`is_empty`](MaxHeap::is_empty) (or use
    /// [`peek_max`](MaxHeap::peek_max)) first.
    pub fn pop_max(&mut self) -> (K, V) {
        assert!(!self.entries.is_empty(), "`MaxHeap::pop_max()` - heap is empty!");
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let max = self.entries.pop().expect("checked non-empty");
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        max
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 <= self.entries[parent].0 {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.entries[left].0 > self.entries[largest].0 {
                largest = left;
            }
            if right < len && self.entries[right].0 > self.entries[largest].0 {
                largest = right;
            }
            if largest == index {
                return;
            }
            self.entries.swap(index, largest);
            index = largest;
        }
    }

    /// Checks the max-heap invariant over the whole array.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        for index in 1..self.entries.len() {
            let parent = (index - 1) / 2;
            assert!(
                self.entries[parent].0 >= self.entries[index].0,
                "heap invariant broken at index {index}"
            );
        }
    }
}

impl<K: Ord, V> Default for MaxHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
