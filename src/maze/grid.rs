use core::fmt;

use alloc::vec::Vec;

use crate::hollow::{HollowKind, HollowRef};

use super::position::Position;

/// What a maze cell holds.
#[derive(Debug, PartialEq)]
pub enum Tile {
    Empty,
    Wall,
    Start,
    Exit,
    /// A treasure hollow; shared hollows appear here as aliases of one
    /// underlying collection.
    Hollow(HollowRef),
}

impl Tile {
    /// Single-character rendering used by [`Maze`]'s `Display` and by
    /// the text parser.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall => '#',
            Self::Start => 'P',
            Self::Exit => 'E',
            Self::Hollow(hollow) => match hollow.kind() {
                HollowKind::Exclusive => 'S',
                HollowKind::Shared => 'M',
            },
        }
    }

    #[must_use]
    pub const fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }

    /// The hollow behind this tile, if it is one.
    #[must_use]
    pub const fn hollow(&self) -> Option<&HollowRef> {
        match self {
            Self::Hollow(hollow) => Some(hollow),
            _ => None,
        }
    }
}

/// One cell of the grid. `visited` is owned by path search: set while a
/// run explores, reset before the next run starts.
#[derive(Debug, PartialEq)]
pub struct MazeCell {
    pub(crate) tile: Tile,
    pub(crate) position: Position,
    pub(crate) visited: bool,
}

impl MazeCell {
    #[must_use]
    pub const fn tile(&self) -> &Tile {
        &self.tile
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn visited(&self) -> bool {
        self.visited
    }
}

/// A rectangular maze: immutable in shape once constructed; only cell
/// `visited` flags (during search) and hollow contents (during the
/// treasure walk) mutate afterwards.
#[derive(Debug, PartialEq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    start: Position,
    exits: Vec<Position>,
    grid: Vec<Vec<MazeCell>>,
}

impl Maze {
    /// Builds a maze from collaborator-supplied placements.
    ///
    /// Later placements overwrite earlier ones on the same cell, in the
    /// order: start, walls, hollows, exits.
    ///
    /// # Panics
    ///
    /// Panics if the grid is zero-sized or any placement lies outside it;
    /// a grid builder handing out out-of-range positions has broken its
    /// contract.
    #[must_use]
    pub fn new(
        start: Position,
        exits: Vec<Position>,
        walls: &[Position],
        hollows: Vec<(HollowRef, Position)>,
        rows: usize,
        cols: usize,
    ) -> Self {
        assert!(rows > 0 && cols > 0, "`Maze::new()` - the grid must have at least one cell!");

        let mut grid: Vec<Vec<MazeCell>> = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                        let position = Position::new(row as i32, col as i32);
                        MazeCell {
                            tile: Tile::Empty,
                            position,
                            visited: false,
                        }
                    })
                    .collect()
            })
            .collect();

        let mut place = |position: Position, tile: Tile| {
            let (row, col) = index_for(position, rows, cols)
                .expect("`Maze::new()` - a placement lies outside the grid!");
            grid[row][col].tile = tile;
        };

        place(start, Tile::Start);
        for &wall in walls {
            place(wall, Tile::Wall);
        }
        for (hollow, position) in hollows {
            place(position, Tile::Hollow(hollow));
        }
        for &exit in &exits {
            place(exit, Tile::Exit);
        }

        Self {
            rows,
            cols,
            start,
            exits,
            grid,
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn exits(&self) -> &[Position] {
        &self.exits
    }

    /// The cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the grid.
    #[must_use]
    pub fn cell_at(&self, position: Position) -> &MazeCell {
        let (row, col) =
            index_for(position, self.rows, self.cols).expect("`Maze::cell_at()` - `position` is outside the grid!");
        &self.grid[row][col]
    }

    pub(crate) fn cell_at_mut(&mut self, position: Position) -> &mut MazeCell {
        let (row, col) =
            index_for(position, self.rows, self.cols).expect("`Maze::cell_at_mut()` - `position` is outside the grid!");
        &mut self.grid[row][col]
    }

    /// In bounds and not a wall. Hollows, exits and the start are all
    /// passable.
    #[must_use]
    pub fn is_passable(&self, position: Position) -> bool {
        index_for(position, self.rows, self.cols).is_some_and(|(row, col)| !self.grid[row][col].tile.is_wall())
    }

    pub(crate) fn is_exit(&self, position: Position) -> bool {
        self.exits.contains(&position)
    }

    /// Clears every cell's `visited` flag; path search calls this before
    /// each run so runs stay independent.
    pub fn reset_visited(&mut self) {
        for row in &mut self.grid {
            for cell in row {
                cell.visited = false;
            }
        }
    }
}

/// Grid indices for an in-bounds position.
fn index_for(position: Position, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let row = usize::try_from(position.row).ok()?;
    let col = usize::try_from(position.col).ok()?;
    (row < rows && col < cols).then_some((row, col))
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.tile.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn placement_and_rendering() {
        let maze = Maze::new(
            Position::new(0, 0),
            vec![Position::new(2, 2)],
            &[Position::new(1, 1)],
            Vec::new(),
            3,
            3,
        );

        assert_eq!(maze.to_string(), "P  \n # \n  E");
        assert!(maze.is_passable(Position::new(0, 1)));
        assert!(!maze.is_passable(Position::new(1, 1)));
        assert!(!maze.is_passable(Position::new(-1, 0)));
        assert!(!maze.is_passable(Position::new(0, 3)));
    }

    #[test]
    #[should_panic(expected = "`Maze::new()` - a placement lies outside the grid!")]
    fn placement_out_of_bounds() {
        let _ = Maze::new(Position::new(5, 5), Vec::new(), &[], Vec::new(), 3, 3);
    }
}
