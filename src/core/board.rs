//! The board: a position-keyed set of pieces.
//!
//! Backed by `im::HashMap` so cloning is O(1); snapshots and replay frames
//! clone the full board on every move. The at-most-one-piece-per-tile
//! invariant holds by construction: the map key *is* the position, and
//! every stored piece's `position` field equals its key.

use std::hash::BuildHasherDefault;

use im::HashMap as ImHashMap;
use rustc_hash::FxHasher;

use super::piece::{Piece, PieceKind, Team};
use super::position::Position;

type TileMap = ImHashMap<Position, Piece, BuildHasherDefault<FxHasher>>;

/// An 8x8 checkers board.
///
/// Not serialized directly; the wire format carries a flat piece list and
/// rebuilds the map on receive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    tiles: TileMap,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the standard 12-per-side opening layout.
    ///
    /// Pieces occupy the tiles where x + y is even on each side's first
    /// three ranks. `First` fills y = 0..=2, `Second` fills y = 5..=7.
    #[must_use]
    pub fn opening() -> Self {
        let mut board = Self::empty();
        for y in 0..3 {
            for x in 0..8 {
                if (x + y) % 2 == 0 {
                    board.place(Piece::man(Position::new(x, y), Team::First));
                }
            }
        }
        for y in 5..8 {
            for x in 0..8 {
                if (x + y) % 2 == 0 {
                    board.place(Piece::man(Position::new(x, y), Team::Second));
                }
            }
        }
        board
    }

    /// Build a board from a list of pieces. Later pieces on the same tile
    /// replace earlier ones.
    #[must_use]
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut board = Self::empty();
        for piece in pieces {
            board.place(piece);
        }
        board
    }

    /// Put a piece on its own position, replacing any occupant.
    pub fn place(&mut self, piece: Piece) {
        self.tiles.insert(piece.position, piece);
    }

    /// Remove and return the piece at `position`, if any.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.tiles.remove(&position)
    }

    /// The piece at `position`, if any.
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.tiles.get(&position)
    }

    /// Whether any piece stands on `position`.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Whether a piece of the opposing team stands on `position`.
    #[must_use]
    pub fn is_occupied_by_opponent(&self, position: Position, team: Team) -> bool {
        self.tiles
            .get(&position)
            .is_some_and(|p| p.team != team)
    }

    /// Relocate the piece at `from` to `to`.
    ///
    /// Returns false (and leaves the board unchanged) if `from` is empty.
    /// The caller is responsible for having validated the move; an occupant
    /// of `to` would be replaced.
    pub fn relocate(&mut self, from: Position, to: Position) -> bool {
        match self.tiles.remove(&from) {
            Some(mut piece) => {
                piece.position = to;
                self.tiles.insert(to, piece);
                true
            }
            None => false,
        }
    }

    /// Promote every Man standing on its team's promotion rank.
    ///
    /// Runs as a whole-board sweep after each applied move, so a promotion
    /// takes effect before the next move is evaluated.
    pub fn promote_back_ranks(&mut self) {
        let due: Vec<Position> = self
            .tiles
            .values()
            .filter(|p| p.kind == PieceKind::Man && p.on_promotion_rank())
            .map(|p| p.position)
            .collect();
        for position in due {
            if let Some(piece) = self.tiles.get_mut(&position) {
                piece.kind = PieceKind::King;
            }
        }
    }

    /// Iterate over all pieces.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles.values()
    }

    /// Iterate over the pieces of one team.
    pub fn team_pieces(&self, team: Team) -> impl Iterator<Item = &Piece> + '_ {
        self.tiles.values().filter(move |p| p.team == team)
    }

    /// Number of pieces a team has left.
    #[must_use]
    pub fn team_count(&self, team: Team) -> usize {
        self.team_pieces(team).count()
    }

    /// Total piece count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
