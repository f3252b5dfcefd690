//! The wire payload: a complete state snapshot.
//!
//! After every locally-applied move the mover serializes the *entire*
//! authoritative state, never a diff, and sends it to the opponent. The
//! receiver replaces its own state wholesale. Because only the peer whose
//! turn it is ever produces a move, there is never a concurrent write to
//! merge: the protocol is last-writer-wins by construction.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Piece, Position, Team};
use crate::game::GameState;

use super::session::ProtocolError;

/// Full game state as sent to the opposing peer.
///
/// `from`/`to` describe the move that produced this snapshot. They are
/// informational (move lists, animations); reconciliation trusts the
/// `pieces` field alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub pieces: Vec<Piece>,
    pub turn: Team,
    pub over: bool,
    pub winner: Option<Team>,
    pub status: String,
    pub from: Option<Position>,
    pub to: Option<Position>,
}

/// Serialize the authoritative parts of `state`, noting the move that
/// produced it.
#[must_use]
pub fn publish(state: &GameState, produced_by: Option<(Position, Position)>) -> StateSnapshot {
    StateSnapshot {
        pieces: state.board.pieces().copied().collect(),
        turn: state.turn,
        over: state.over,
        winner: state.winner,
        status: state.status.clone(),
        from: produced_by.map(|(from, _)| from),
        to: produced_by.map(|(_, to)| to),
    }
}

/// Replace `local` with the contents of `incoming`.
///
/// The board, turn, and result fields are adopted as-is; the mandatory-
/// capture set is recomputed from the received board and the continuation
/// lock is cleared; only the mover's side knows mid-chain state, and it is
/// re-derivable.
pub fn reconcile(local: &mut GameState, incoming: &StateSnapshot) {
    local.adopt(
        Board::from_pieces(incoming.pieces.iter().copied()),
        incoming.turn,
        incoming.over,
        incoming.winner,
        incoming.status.clone(),
    );
}

impl StateSnapshot {
    /// Encode for the wire.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        bincode::serialize(self).map_err(|e| ProtocolError::Codec(e.to_string()))
    }

    /// Decode from the wire.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        bincode::deserialize(bytes).map_err(|e| ProtocolError::Codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PieceKind;

    #[test]
    fn test_reconcile_publish_roundtrip_is_identity() {
        let mut mover = GameState::new();
        mover
            .attempt_move(Team::First, Position::new(2, 2), Position::new(3, 3))
            .unwrap();

        let snapshot = publish(&mover, Some((Position::new(2, 2), Position::new(3, 3))));

        let mut receiver = GameState::new();
        reconcile(&mut receiver, &snapshot);

        assert_eq!(receiver.board, mover.board);
        assert_eq!(receiver.turn, mover.turn);
        assert_eq!(receiver.over, mover.over);
        assert_eq!(receiver.winner, mover.winner);
        assert_eq!(receiver.status, mover.status);
    }

    #[test]
    fn test_self_reconcile_is_idempotent() {
        let mut state = GameState::new();
        state
            .attempt_move(Team::First, Position::new(2, 2), Position::new(3, 3))
            .unwrap();
        let before = state.clone();

        let snapshot = publish(&state, None);
        reconcile(&mut state, &snapshot);

        assert_eq!(state.board, before.board);
        assert_eq!(state.turn, before.turn);
        assert_eq!(state.over, before.over);
        assert_eq!(state.winner, before.winner);
    }

    #[test]
    fn test_reconcile_recomputes_mandatory_set() {
        // Mover's last move put a First piece in capture range of Second.
        let mut mover = GameState::new();
        mover.adopt(
            Board::from_pieces([
                Piece::man(Position::new(3, 3), Team::First),
                Piece::man(Position::new(4, 4), Team::Second),
            ]),
            Team::Second,
            false,
            None,
            crate::game::STATUS_RUNNING.to_string(),
        );

        let snapshot = publish(&mover, None);
        let mut receiver = GameState::new();
        reconcile(&mut receiver, &snapshot);

        assert_eq!(receiver.mandatory_captures(), &[Position::new(4, 4)]);
        assert_eq!(receiver.active_multi_capture(), None);
    }

    #[test]
    fn test_wire_roundtrip() {
        let mut state = GameState::new();
        state
            .attempt_move(Team::First, Position::new(2, 2), Position::new(3, 3))
            .unwrap();
        let snapshot = publish(&state, Some((Position::new(2, 2), Position::new(3, 3))));

        let bytes = snapshot.encode().unwrap();
        let back = StateSnapshot::decode(&bytes).unwrap();
        assert_eq!(snapshot, back);

        // Readable encoding round-trips too.
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_snapshot_preserves_piece_kinds() {
        let mut state = GameState::new();
        state.adopt(
            Board::from_pieces([
                Piece::king(Position::new(3, 3), Team::First),
                Piece::man(Position::new(6, 6), Team::Second),
            ]),
            Team::First,
            false,
            None,
            crate::game::STATUS_RUNNING.to_string(),
        );

        let snapshot = publish(&state, None);
        let mut receiver = GameState::new();
        reconcile(&mut receiver, &snapshot);

        assert_eq!(
            receiver.board.piece_at(Position::new(3, 3)).unwrap().kind,
            PieceKind::King
        );
    }
}
