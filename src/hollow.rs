//! Treasure hollows: greedy "best ratio that fits" extraction.
//!
//! A hollow owns a collection of treasures restructured once, at
//! construction, into whichever shape suits its extraction strategy:
//!
//! - [`TreeHollow`] keys a [`BalancedTree`] by *negated* ratio, so an
//!   ascending in-order walk visits treasures in descending ratio order.
//! - [`HeapHollow`] keys a [`MaxHeap`] by ratio directly and restores
//!   rejected extractions afterwards.
//!
//! Both implement the [`TreasureStore`] capability, so the maze never
//! cares which strategy sits behind a cell.

use core::cell::RefCell;
use core::fmt;

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::heap::MaxHeap;
use crate::tree::BalancedTree;
use crate::treasure::{Ratio, Treasure};

/// Greedy extraction over a restructured treasure collection.
///
/// A successful call removes exactly the returned treasure and decreases
/// [`len`](TreasureStore::len) by one; an unsuccessful call leaves size
/// and contents unchanged, even when the implementation shuffled entries
/// around internally to find that out.
pub trait TreasureStore {
    /// Removes and returns the highest-ratio treasure whose weight is at
    /// most `capacity`, or `None` if nothing fits or the store is empty.
    fn take_best_fitting(&mut self, capacity: u32) -> Option<Treasure>;

    /// Number of treasures currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tree-backed strategy with a private collection.
///
/// Restructuring sorts and balanced-builds in O(n log n). Extraction
/// walks ascending negated-ratio order (descending ratio) and removes the
/// first fit: best case O(log n), worst case O(n). Equal ratios resolve
/// deterministically, to whichever tied treasure the balanced build
/// placed first in walk order.
pub struct TreeHollow {
    treasures: BalancedTree<Ratio, Treasure>,
}

impl TreeHollow {
    /// # Panics
    ///
    /// Panics if `treasures` is empty — suppliers guarantee every hollow
    /// at least one treasure.
    #[must_use]
    pub fn new(treasures: Vec<Treasure>) -> Self {
        assert!(!treasures.is_empty(), "`TreeHollow::new()` - a hollow holds at least one treasure!");
        let entries = treasures.into_iter().map(|treasure| (-treasure.ratio(), treasure)).collect();
        Self {
            treasures: BalancedTree::from_entries(entries),
        }
    }

    /// Ascending negated-ratio (descending ratio) walk of the remaining
    /// treasures.
    pub fn iter(&self) -> impl Iterator<Item = &Treasure> {
        self.treasures.iter().map(|(_, treasure)| treasure)
    }
}

impl TreasureStore for TreeHollow {
    fn take_best_fitting(&mut self, capacity: u32) -> Option<Treasure> {
        self.treasures
            .extract_in_order(|_, treasure| treasure.weight() <= capacity)
            .map(|(_, treasure)| treasure)
    }

    fn len(&self) -> usize {
        self.treasures.len()
    }
}

/// Heap-backed strategy, built to be aliased by many grid placements.
///
/// Restructuring heapifies in O(n). Extraction pops maxima until one
/// fits, holding rejects in a side buffer that is pushed back afterwards;
/// only the accepted treasure is permanently removed. Best case O(log n),
/// worst case O(n log n) when everything is rejected once.
pub struct HeapHollow {
    treasures: MaxHeap<Ratio, Treasure>,
}

impl HeapHollow {
    /// # Panics
    ///
    /// Panics if `treasures` is empty — suppliers guarantee every hollow
    /// at least one treasure.
    #[must_use]
    pub fn new(treasures: Vec<Treasure>) -> Self {
        assert!(!treasures.is_empty(), "`HeapHollow::new()` - a hollow holds at least one treasure!");
        let entries = treasures.into_iter().map(|treasure| (treasure.ratio(), treasure)).collect();
        Self {
            treasures: MaxHeap::heapify(entries),
        }
    }
}

impl TreasureStore for HeapHollow {
    fn take_best_fitting(&mut self, capacity: u32) -> Option<Treasure> {
        let mut rejected: Vec<(Ratio, Treasure)> = Vec::new();
        let mut accepted = None;

        while !self.treasures.is_empty() {
            let (ratio, treasure) = self.treasures.pop_max();
            if treasure.weight() <= capacity {
                accepted = Some(treasure);
                break;
            }
            rejected.push((ratio, treasure));
        }

        // Reinsertion order does not affect the heap invariant; net
        // effect is that only the accepted treasure left the store.
        for (ratio, treasure) in rejected {
            self.treasures.push(ratio, treasure);
        }
        accepted
    }

    fn len(&self) -> usize {
        self.treasures.len()
    }
}

/// Which strategy a hollow was constructed with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HollowKind {
    /// Tree-backed, private collection: one grid placement.
    Exclusive,
    /// Heap-backed, one collection aliased by every placement.
    Shared,
}

/// A hollow as placed into maze cells: a strategy chosen at construction
/// behind one shared-ownership handle.
///
/// The handle is deliberately not `Clone`: aliasing is explicit via
/// [`alias`](HollowRef::alias), so an exclusive hollow cannot end up
/// referenced from two cells by accident. All aliases of a shared hollow
/// see each other's removals — the collection lives as long as the maze
/// that holds it.
pub struct HollowRef {
    kind: HollowKind,
    store: Rc<RefCell<dyn TreasureStore>>,
}

impl HollowRef {
    /// A hollow with its own tree-backed collection.
    #[must_use]
    pub fn exclusive(treasures: Vec<Treasure>) -> Self {
        Self {
            kind: HollowKind::Exclusive,
            store: Rc::new(RefCell::new(TreeHollow::new(treasures))),
        }
    }

    /// A hollow whose heap-backed collection may be aliased across many
    /// placements.
    #[must_use]
    pub fn shared(treasures: Vec<Treasure>) -> Self {
        Self {
            kind: HollowKind::Shared,
            store: Rc::new(RefCell::new(HeapHollow::new(treasures))),
        }
    }

    /// Another reference to the *same* underlying collection; removing a
    /// treasure through any alias makes it gone through all of them.
    #[must_use]
    pub fn alias(&self) -> Self {
        Self {
            kind: self.kind,
            store: Rc::clone(&self.store),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> HollowKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Delegates to the strategy's
    /// [`take_best_fitting`](TreasureStore::take_best_fitting); `&self`
    /// because mutation goes through the shared cell.
    pub fn take_best_fitting(&self, capacity: u32) -> Option<Treasure> {
        self.store.borrow_mut().take_best_fitting(capacity)
    }
}

impl fmt::Debug for HollowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HollowRef").field("kind", &self.kind).field("len", &self.len()).finish()
    }
}

impl PartialEq for HollowRef {
    /// Two handles are equal iff they alias the same underlying store —
    /// the identity notion documented for [`alias`](HollowRef::alias).
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && Rc::ptr_eq(&self.store, &other.store)
    }
}
