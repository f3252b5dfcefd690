//! The authoritative game state and its single mutation point.
//!
//! ## GameState
//!
//! One instance per peer, explicitly owned, never shared. Everything the
//! UI or the wire needs is derivable from it. The only way it changes is:
//! - `attempt_move` (full validation, then apply),
//! - `reset` (back to the opening position),
//! - wholesale replacement by an incoming snapshot (`sync::reconcile`),
//! - `forfeit` (the opponent closed the room).
//!
//! ## Invariant
//!
//! `active_multi_capture` is `Some(p)` only while `mandatory_captures` is
//! exactly `{p}`: mid-chain, the acting team may move no other piece, and
//! only by capturing.

use log::debug;

use crate::core::{Board, Position, Team};
use crate::rules::{
    evaluate_move, has_capture_from, mandatory_capture_positions, CaptureSet, MoveOutcome,
};

use super::over;

/// Status line while a game is running.
pub const STATUS_RUNNING: &str = "Game continues";

/// Why a move request was rejected. Every rejection is a no-op on state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The move fails geometry, occupancy, or mandatory-capture checks.
    IllegalMove,
    /// It is not the acting team's turn, the game is over, or the
    /// multi-capture continuation lock points at a different piece.
    WrongTurn,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::IllegalMove => write!(f, "Illegal move"),
            MoveError::WrongTurn => write!(f, "Not this team's turn"),
        }
    }
}

impl std::error::Error for MoveError {}

/// The complete local game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Current board.
    pub board: Board,
    /// Team whose move is awaited.
    pub turn: Team,
    /// Game finished flag.
    pub over: bool,
    /// Winner, set iff `over`.
    pub winner: Option<Team>,
    /// Status line for display and for the wire.
    pub status: String,
    mandatory_captures: CaptureSet,
    active_multi_capture: Option<Position>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: opening layout, `First` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::opening(),
            turn: Team::First,
            over: false,
            winner: None,
            status: STATUS_RUNNING.to_string(),
            mandatory_captures: CaptureSet::new(),
            active_multi_capture: None,
        }
    }

    /// Reset back to the opening position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Positions currently allowed to move (empty means no restriction).
    #[must_use]
    pub fn mandatory_captures(&self) -> &[Position] {
        &self.mandatory_captures
    }

    /// The piece locked into a multi-capture chain, if any.
    #[must_use]
    pub fn active_multi_capture(&self) -> Option<Position> {
        self.active_multi_capture
    }

    /// Attempt a move by `mover` from `from` to `to`.
    ///
    /// On success the move is applied in full (relocation, capture
    /// removal, promotion, turn hand-off or continuation lock, game-over
    /// detection) and the outcome is returned. On rejection nothing
    /// changes.
    pub fn attempt_move(
        &mut self,
        mover: Team,
        from: Position,
        to: Position,
    ) -> Result<MoveOutcome, MoveError> {
        // Turn gate: also covers finished games and the continuation lock.
        if self.over || mover != self.turn {
            return Err(MoveError::WrongTurn);
        }
        if let Some(locked) = self.active_multi_capture {
            if from != locked {
                return Err(MoveError::WrongTurn);
            }
        }

        let piece = *self.board.piece_at(from).ok_or(MoveError::IllegalMove)?;
        if piece.team != mover {
            return Err(MoveError::IllegalMove);
        }

        // Mandatory-capture gate: while any capture exists, only pieces in
        // the set may move, and only by capturing.
        let must_capture = !self.mandatory_captures.is_empty();
        if must_capture && !self.mandatory_captures.contains(&from) {
            return Err(MoveError::IllegalMove);
        }

        let outcome = evaluate_move(from, to, piece.kind, piece.team, &self.board);
        if !outcome.success {
            return Err(MoveError::IllegalMove);
        }
        if must_capture && !outcome.is_capture() {
            return Err(MoveError::IllegalMove);
        }

        // Sole mutation point: everything below runs only after full
        // validation.
        self.board.relocate(from, to);
        if let Some(captured) = outcome.captured {
            self.board.remove(captured);
        }
        self.board.promote_back_ranks();

        // A capture continues the turn while the landed piece (with its
        // post-promotion kind) can capture again.
        let landed_kind = match self.board.piece_at(to) {
            Some(p) => p.kind,
            None => piece.kind,
        };
        let continues =
            outcome.is_capture() && has_capture_from(to, landed_kind, mover, &self.board);

        if continues {
            self.active_multi_capture = Some(to);
            self.mandatory_captures = CaptureSet::from_slice(&[to]);
        } else {
            self.active_multi_capture = None;
            self.turn = mover.opponent();
            self.mandatory_captures = mandatory_capture_positions(&self.board, self.turn);
        }

        if let Some(end) = over::evaluate(&self.board, self.turn) {
            self.over = true;
            self.winner = Some(end.winner);
            self.status = end.message();
            self.mandatory_captures.clear();
            self.active_multi_capture = None;
        } else {
            self.status = STATUS_RUNNING.to_string();
        }

        debug!(
            "{mover} moved {from} -> {to}{}; next turn {}",
            match outcome.captured {
                Some(c) => format!(", capturing {c}"),
                None => String::new(),
            },
            self.turn
        );
        Ok(outcome)
    }

    /// The opponent closed the room or forfeited: end the game in favor of
    /// `winner` without touching the board.
    pub fn forfeit(&mut self, winner: Team) {
        self.over = true;
        self.winner = Some(winner);
        self.status = format!("Game Over! {winner} wins! (Opponent left the game)");
        self.mandatory_captures.clear();
        self.active_multi_capture = None;
    }

    /// Replace this state with the authoritative fields of a received
    /// snapshot and re-derive the local-only helpers from the new board.
    ///
    /// The mandatory-capture set is recomputed rather than trusted from the
    /// wire; the continuation lock is local to the mover and always cleared
    /// on the receiving side.
    pub(crate) fn adopt(
        &mut self,
        board: Board,
        turn: Team,
        over: bool,
        winner: Option<Team>,
        status: String,
    ) {
        self.board = board;
        self.turn = turn;
        self.over = over;
        self.winner = winner;
        self.status = status;
        self.active_multi_capture = None;
        self.mandatory_captures = if over {
            CaptureSet::new()
        } else {
            mandatory_capture_positions(&self.board, self.turn)
        };
    }
}
