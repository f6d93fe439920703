//! Grid-maze treasure engine.
//!
//! This crate models a maze whose cells may hold "treasure hollows" and
//! computes two things: a route from the start cell to an exit
//! (depth-first, with backtracking), and the greedy-optimal treasures
//! collectible along that route under a weight budget.
//!
//! The interesting work is in the selection engine:
//!
//! - [`merge_sort`] — stable O(n log n) sort over keyed entries, the
//!   prerequisite for the balanced build;
//! - [`BalancedTree`] — a binary search tree built from an unsorted batch
//!   in guaranteed O(n log n) by inserting range midpoints first, pinning
//!   the height at `⌊log2 n⌋ + 1`;
//! - [`MaxHeap`] — an array-backed binary max-heap with O(n) bulk
//!   construction;
//! - two interchangeable [`TreasureStore`] strategies: [`TreeHollow`]
//!   walks descending ratio order and removes the first treasure that
//!   fits a budget; [`HeapHollow`] pops maxima and restores every
//!   rejected item afterwards;
//! - [`Maze`] — the grid, its text-format parser, the path search, and
//!   the path walk that drains hollows under a shrinking budget.
//!
//! # Example
//!
//! ```
//! use hollow_maze::{Maze, Treasure};
//!
//! let text = "#####\n#P S#\n# #E#\n#####";
//!
//! // The treasure supplier is a collaborator: the engine only requires
//! // each hollow's batch to be non-empty, with positive weights.
//! let mut supply = || vec![Treasure::new(9, 3), Treasure::new(4, 4)];
//! let mut maze = Maze::parse(text, &mut supply).unwrap();
//!
//! let path = maze.find_way_out().expect("an exit is reachable");
//! let haul = maze.take_treasures(&path, 5).expect("something fits");
//! assert_eq!(haul, vec![Treasure::new(9, 3)]);
//! ```
//!
//! # Design notes
//!
//! `no_std` + `alloc`; single-threaded and synchronous throughout. The
//! shared hollow kind is one heap-backed collection aliased by many grid
//! cells (`Rc<RefCell<…>>`), so a removal through any alias is visible
//! through all of them. Recursive algorithms (balanced build, path
//! search) run on explicit stacks, so adversarial inputs cannot exhaust
//! the native call stack.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod heap;
pub mod hollow;
pub mod maze;
pub mod merge;
pub mod tree;
pub mod treasure;

pub use heap::MaxHeap;
pub use hollow::{HeapHollow, HollowKind, HollowRef, TreasureStore, TreeHollow};
pub use maze::{Direction, Maze, MazeCell, ParseError, Position, Tile, TreasureSupplier};
pub use merge::merge_sort;
pub use tree::BalancedTree;
pub use treasure::{Ratio, Treasure};
