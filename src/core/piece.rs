//! Teams, piece kinds, and pieces.
//!
//! ## Team
//!
//! Two symmetric sides. `First` is the room requester's side and moves
//! toward increasing y; `Second` moves toward decreasing y. Nothing else
//! distinguishes them.
//!
//! ## PieceKind
//!
//! `Man` steps one diagonal forward and captures by a two-tile jump in any
//! diagonal direction. `King` slides any distance along a clear diagonal.
//! A Man becomes a King on reaching the opposite back rank.

use serde::{Deserialize, Serialize};

use super::position::{Position, BOARD_SIZE};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    First,
    Second,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::First => Team::Second,
            Team::Second => Team::First,
        }
    }

    /// The team's forward y direction (+1 or -1).
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Team::First => 1,
            Team::Second => -1,
        }
    }

    /// The y rank on which this team's Men promote.
    #[must_use]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Team::First => BOARD_SIZE - 1,
            Team::Second => 0,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::First => write!(f, "First"),
            Team::Second => write!(f, "Second"),
        }
    }
}

/// The movement class of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board.
///
/// `team` never changes for the piece's lifetime; `position` changes only
/// through a validated move, `kind` only through promotion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub position: Position,
    pub kind: PieceKind,
    pub team: Team,
}

impl Piece {
    /// Create a Man for `team` at `position`.
    #[must_use]
    pub const fn man(position: Position, team: Team) -> Self {
        Self {
            position,
            kind: PieceKind::Man,
            team,
        }
    }

    /// Create a King for `team` at `position`.
    #[must_use]
    pub const fn king(position: Position, team: Team) -> Self {
        Self {
            position,
            kind: PieceKind::King,
            team,
        }
    }

    /// Whether this piece stands on its team's promotion rank.
    #[must_use]
    pub const fn on_promotion_rank(&self) -> bool {
        self.position.y == self.team.promotion_rank()
    }
}
