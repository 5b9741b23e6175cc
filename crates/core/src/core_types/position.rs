use serde::{Deserialize, Serialize};

/// Grid coordinates of a slot, `(row, col)`.
///
/// Doubles as the identity of the tree occupying that slot, since trees never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Edge-sharing neighbours in the order up, down, left, right.
    ///
    /// Directions that would underflow are dropped; the upper bound is the caller's
    /// concern since only the grid knows its dimensions.
    pub fn von_neumann(self) -> impl Iterator<Item = Position> {
        let Position { row, col } = self;
        [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            row.checked_add(1).map(|r| Position::new(r, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
            col.checked_add(1).map(|c| Position::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
