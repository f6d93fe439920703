//! The grid maze: cells and construction, text parsing, depth-first path
//! search, and the path-treasure walk.

mod grid;
mod parse;
mod position;
mod search;

pub use grid::{Maze, MazeCell, Tile};
pub use parse::{ParseError, TreasureSupplier};
pub use position::{Direction, Position};
