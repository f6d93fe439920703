use core::fmt;

/// A cell coordinate: `(row, col)`, zero-based, signed so that stepping
/// off the top or left edge stays representable (and is then rejected by
/// the bounds check rather than by an underflow).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring position one step in `direction`.
    #[inline]
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal moves, in the fixed order path search explores them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Exploration order for the depth-first search. Changing this order
    /// changes which of several valid paths gets found, so it is part of
    /// the search's observable behavior.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row/column delta of one step.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn steps() {
        let origin = Position::new(3, 4);
        assert_eq!(origin.step(Direction::Up), Position::new(2, 4));
        assert_eq!(origin.step(Direction::Down), Position::new(4, 4));
        assert_eq!(origin.step(Direction::Left), Position::new(3, 3));
        assert_eq!(origin.step(Direction::Right), Position::new(3, 5));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Position::new(0, 0), Position::new(0, 0));
        assert_ne!(Position::new(0, 1), Position::new(1, 0));
    }
}
