//! Depth-first path discovery and the path-treasure walk.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::treasure::Treasure;

use super::grid::{Maze, Tile};
use super::position::{Direction, Position};

/// One explicit search frame: the candidate neighbors of an entered cell
/// and a cursor over them. Candidates are generated once, at entry, in
/// [`Direction::ALL`] order.
struct Frame {
    candidates: SmallVec<[Position; 4]>,
    next: usize,
}

/// Outcome of stepping into a cell.
enum Step {
    /// The cell is an exit; the path is complete.
    Found,
    /// The cell was entered and its neighbors are now on the stack.
    Entered,
    /// The cell was already visited this run; skip it.
    Dead,
}

impl Maze {
    /// Neighbor positions reachable in one step: in bounds and not a
    /// wall, in the fixed order up, down, left, right.
    #[must_use]
    pub fn available_positions(&self, from: Position) -> SmallVec<[Position; 4]> {
        let mut candidates = SmallVec::new();
        for direction in Direction::ALL {
            let next = from.step(direction);
            if self.is_passable(next) {
                candidates.push(next);
            }
        }
        candidates
    }

    fn enter(&mut self, position: Position, path: &mut Vec<Position>, frames: &mut Vec<Frame>) -> Step {
        // Exit membership is checked before the visited flag, and exit
        // cells are never marked: reaching one ends the run immediately.
        if self.is_exit(position) {
            path.push(position);
            return Step::Found;
        }
        let cell = self.cell_at_mut(position);
        if cell.visited {
            return Step::Dead;
        }
        cell.visited = true;
        path.push(position);
        frames.push(Frame {
            candidates: self.available_positions(position),
            next: 0,
        });
        Step::Entered
    }

    /// Depth-first search for a route from the start cell to any exit.
    ///
    /// Returns the start-to-exit path inclusive, or `None` when every
    /// reachable cell has been exhausted. Cells are marked visited on
    /// entry and the marks are *not* undone on backtrack: a cell rejected
    /// down one branch is never retried via a sibling branch in the same
    /// run. That keeps the search linear in the cell count, but a maze
    /// whose only remaining routes pass through such a cell reports no
    /// path even though one exists — a known quirk, kept deliberately.
    ///
    /// Each run resets all `visited` flags first, so runs on the same
    /// maze are independent.
    pub fn find_way_out(&mut self) -> Option<Vec<Position>> {
        self.reset_visited();

        let mut path: Vec<Position> = Vec::new();
        let mut frames: Vec<Frame> = Vec::new();

        match self.enter(self.start(), &mut path, &mut frames) {
            Step::Found => return Some(path),
            Step::Entered => {}
            Step::Dead => unreachable!("flags were just reset; the start cell cannot be visited"),
        }

        loop {
            let Some(frame) = frames.last_mut() else {
                // The start cell itself backtracked: exhaustion.
                return None;
            };
            if frame.next >= frame.candidates.len() {
                // Dead end: drop the cell from the path. It stays
                // visited for the rest of the run.
                frames.pop();
                path.pop();
                continue;
            }
            let next = frame.candidates[frame.next];
            frame.next += 1;

            match self.enter(next, &mut path, &mut frames) {
                Step::Found => return Some(path),
                Step::Entered | Step::Dead => {}
            }
        }
    }

    /// Walks `path` in order, draining hollows under a shrinking budget.
    ///
    /// Each hollow-bearing cell gets exactly one
    /// [`take_best_fitting`](crate::TreasureStore::take_best_fitting)
    /// call with the remaining capacity; a success is appended and its
    /// weight deducted, a failure is skipped. The walk never revisits a
    /// hollow after leaving its cell and never looks ahead. Returns
    /// `None` when nothing at all was collected.
    #[must_use]
    pub fn take_treasures(&self, path: &[Position], capacity: u32) -> Option<Vec<Treasure>> {
        let mut remaining = capacity;
        let mut taken: Vec<Treasure> = Vec::new();

        for &position in path {
            if let Tile::Hollow(hollow) = self.cell_at(position).tile() {
                if let Some(treasure) = hollow.take_best_fitting(remaining) {
                    remaining -= treasure.weight();
                    taken.push(treasure);
                }
            }
        }

        if taken.is_empty() { None } else { Some(taken) }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn adjacent_exit_gives_two_cell_path() {
        let mut maze = Maze::new(Position::new(0, 0), vec![Position::new(0, 1)], &[], Vec::new(), 1, 2);
        assert_eq!(maze.find_way_out(), Some(vec![Position::new(0, 0), Position::new(0, 1)]));
    }

    #[test]
    fn start_on_exit() {
        let mut maze = Maze::new(Position::new(0, 0), vec![Position::new(0, 0)], &[], Vec::new(), 1, 2);
        assert_eq!(maze.find_way_out(), Some(vec![Position::new(0, 0)]));
    }

    #[test]
    fn enclosed_exit_is_unreachable() {
        // E walled off in the corner.
        let walls = [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)];
        let mut maze = Maze::new(Position::new(2, 2), vec![Position::new(0, 0)], &walls, Vec::new(), 3, 3);
        assert_eq!(maze.find_way_out(), None);
    }

    #[test]
    fn runs_are_independent() {
        let mut maze = Maze::new(Position::new(0, 0), vec![Position::new(2, 2)], &[], Vec::new(), 3, 3);
        let first = maze.find_way_out();
        let second = maze.find_way_out();
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
