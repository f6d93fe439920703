//! Parsing a maze from its text-grid rendering.
//!
//! The glyph vocabulary matches [`Tile::glyph`](super::grid::Tile::glyph):
//! space for empty, `#` wall, `P` start, `E` exit, `S` an exclusive
//! hollow, `M` a shared hollow. Every `M` in one grid aliases a single
//! underlying collection.

use core::error::Error;
use core::fmt;

use alloc::vec::Vec;

use crate::hollow::HollowRef;
use crate::treasure::Treasure;

use super::grid::Maze;
use super::position::Position;

/// Collaborator that produces the initial, unordered treasure batch for
/// each hollow the parser encounters.
///
/// Kept as a seam (rather than a baked-in generator) so tests and callers
/// control treasure attributes; the engine only requires each batch to be
/// non-empty. Any `FnMut() -> Vec<Treasure>` closure qualifies.
pub trait TreasureSupplier {
    fn treasures(&mut self) -> Vec<Treasure>;
}

impl<F: FnMut() -> Vec<Treasure>> TreasureSupplier for F {
    fn treasures(&mut self) -> Vec<Treasure> {
        self()
    }
}

/// Why a maze text failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The text contains no rows at all.
    EmptyGrid,
    /// A row's width differs from the first row's.
    UnevenRow { row: usize },
    /// No `P` cell.
    MissingStart,
    /// More than one `P` cell; the second one is reported.
    MultipleStarts { position: Position },
    /// No `E` cell.
    MissingExit,
    /// No `S` or `M` cell — a maze without treasures is malformed.
    MissingHollows,
    /// A glyph outside the vocabulary.
    UnknownGlyph { glyph: char, position: Position },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "maze text has no rows"),
            Self::UnevenRow { row } => {
                write!(f, "uneven columns: row {row} differs in width from the first row")
            }
            Self::MissingStart => write!(f, "maze has no start cell ('P')"),
            Self::MultipleStarts { position } => {
                write!(f, "maze has more than one start cell: second 'P' at {position}")
            }
            Self::MissingExit => write!(f, "maze has no exit cell ('E')"),
            Self::MissingHollows => write!(f, "maze has no hollow cells ('S' or 'M')"),
            Self::UnknownGlyph { glyph, position } => {
                write!(f, "unknown glyph {glyph:?} at {position}")
            }
        }
    }
}

impl Error for ParseError {}

impl Maze {
    /// Parses and validates a text grid, drawing each hollow's treasures
    /// from `supplier`.
    ///
    /// Validation requires equal-width rows, exactly one start, at least
    /// one exit, at least one hollow, and no unknown glyphs. All `M`
    /// cells share one collection, created when the first `M` is seen.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use hollow_maze::{Maze, Treasure};
    ///
    /// let text = "P S\n# E";
    /// let mut supply = || vec![Treasure::new(6, 2)];
    /// let maze = Maze::parse(text, &mut supply).unwrap();
    /// assert_eq!((maze.rows(), maze.cols()), (2, 3));
    /// ```
    pub fn parse<S: TreasureSupplier>(text: &str, supplier: &mut S) -> Result<Self, ParseError> {
        let lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
        if lines.is_empty() {
            return Err(ParseError::EmptyGrid);
        }
        let cols = lines[0].chars().count();

        let mut start: Option<Position> = None;
        let mut exits: Vec<Position> = Vec::new();
        let mut walls: Vec<Position> = Vec::new();
        let mut hollows: Vec<(HollowRef, Position)> = Vec::new();
        // The one collection behind every `M` cell in this maze.
        let mut shared: Option<HollowRef> = None;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(ParseError::UnevenRow { row });
            }
            for (col, glyph) in line.chars().enumerate() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let position = Position::new(row as i32, col as i32);
                match glyph {
                    ' ' => {}
                    '#' => walls.push(position),
                    'P' => {
                        if start.is_some() {
                            return Err(ParseError::MultipleStarts { position });
                        }
                        start = Some(position);
                    }
                    'E' => exits.push(position),
                    'S' => hollows.push((HollowRef::exclusive(supplier.treasures()), position)),
                    'M' => {
                        if shared.is_none() {
                            shared = Some(HollowRef::shared(supplier.treasures()));
                        }
                        let alias = shared.as_ref().expect("created above").alias();
                        hollows.push((alias, position));
                    }
                    _ => return Err(ParseError::UnknownGlyph { glyph, position }),
                }
            }
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        if exits.is_empty() {
            return Err(ParseError::MissingExit);
        }
        if hollows.is_empty() {
            return Err(ParseError::MissingHollows);
        }
        Ok(Self::new(start, exits, &walls, hollows, lines.len(), cols))
    }
}
