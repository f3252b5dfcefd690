//! Persisted replay format and deterministic regeneration.
//!
//! A finished game is stored as an ordered list of [`MoveRecord`]s. The
//! replay viewer scrubs through intermediate positions, which are not
//! stored: they are re-derived by feeding the records back through the
//! same state machine that produced them. Records that do not validate
//! against the reconstructed state are skipped with a warning, so a
//! partially corrupt log still yields a watchable replay.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{Board, PieceKind, Position, Team};
use crate::game::GameState;

/// One persisted move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based index in the game.
    pub move_number: u32,
    pub from: Position,
    pub to: Position,
    pub team: Team,
    /// Kind of the piece when the move was made.
    pub kind: PieceKind,
    /// Whether the move ended with a promotion.
    pub is_promoted: bool,
    /// Wall-clock timestamp as recorded by the persistence layer.
    pub timestamp: String,
}

/// One reconstructed position: the board after a move and whose turn it
/// became.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayFrame {
    pub board: Board,
    pub turn: Team,
}

/// Rebuild the position history of a recorded game.
///
/// The first frame is always the opening position with `First` to move;
/// each accepted record appends one frame. Invalid records (wrong turn,
/// illegal geometry against the reconstructed board) are skipped.
#[must_use]
pub fn replay_moves(records: &[MoveRecord]) -> Vec<ReplayFrame> {
    let mut state = GameState::new();
    let mut frames = vec![ReplayFrame {
        board: state.board.clone(),
        turn: state.turn,
    }];

    for record in records {
        match state.attempt_move(record.team, record.from, record.to) {
            Ok(_) => frames.push(ReplayFrame {
                board: state.board.clone(),
                turn: state.turn,
            }),
            Err(err) => {
                warn!(
                    "skipping replay move {} ({} {} -> {}): {err}",
                    record.move_number, record.team, record.from, record.to
                );
            }
        }
    }

    frames
}
