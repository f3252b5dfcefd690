//! Read-only board projection for the UI layer.
//!
//! Renders to 64 tile descriptors in the UI's paint order (top rank first,
//! left to right). Highlighting marks the pieces the viewing team is
//! currently obliged to move: the locked piece mid-chain, otherwise every
//! member of the mandatory-capture set, and only on the viewer's turn.

use crate::core::{Piece, Position, Team, BOARD_SIZE};

use super::state::GameState;

/// One tile of the rendered board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView {
    pub position: Position,
    /// Occupant, if any (kind and team select the sprite).
    pub piece: Option<Piece>,
    /// Whether the tile should be highlighted as a mandatory mover.
    pub highlighted: bool,
}

impl GameState {
    /// Project the state onto 64 tiles for rendering, from the point of
    /// view of `viewer`.
    #[must_use]
    pub fn tiles(&self, viewer: Team) -> Vec<TileView> {
        let highlight_active = viewer == self.turn && !self.over;
        let mut tiles = Vec::with_capacity(64);

        for y in (0..BOARD_SIZE).rev() {
            for x in 0..BOARD_SIZE {
                let position = Position::new(x, y);
                tiles.push(TileView {
                    position,
                    piece: self.board.piece_at(position).copied(),
                    highlighted: highlight_active
                        && self.mandatory_captures().contains(&position),
                });
            }
        }
        tiles
    }
}
