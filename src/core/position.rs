//! Board coordinates.
//!
//! Positions are (x, y) pairs on the fixed 8x8 board. The y axis points
//! away from `Team::First`'s home rank: `First` advances toward y = 7,
//! `Second` toward y = 0.

use serde::{Deserialize, Serialize};

/// Number of tiles along each board axis.
pub const BOARD_SIZE: i8 = 8;

/// A tile coordinate on the 8x8 board.
///
/// Equality is value equality on both fields. Off-board coordinates are
/// representable (intermediate results of offsetting); use
/// [`Position::in_bounds`] before treating one as a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check that the position lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// The position offset by `(dx, dy)`. May leave the board.
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The tile halfway between `self` and `other`.
    ///
    /// Only meaningful when both deltas are even, as in a Man's jump.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four diagonal unit directions, as `(dx, dy)` steps.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
