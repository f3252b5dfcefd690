//! Per-piece movement legality.
//!
//! `evaluate_move` is pure geometry plus occupancy: given the same
//! `(from, to, kind, team, board)` it always returns the same outcome and
//! never touches the board. The team-wide mandatory-capture policy is *not*
//! checked here; the state machine in `game` enforces it before asking, so
//! these predicates stay reusable for capture discovery and replay.

use crate::core::{Board, PieceKind, Position, Team};

/// The verdict on a requested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the move is legal.
    pub success: bool,
    /// The tile of the captured piece, present iff the move is a capture.
    pub captured: Option<Position>,
}

impl MoveOutcome {
    /// An illegal move.
    #[must_use]
    pub const fn illegal() -> Self {
        Self {
            success: false,
            captured: None,
        }
    }

    /// A legal non-capturing move.
    #[must_use]
    pub const fn step() -> Self {
        Self {
            success: true,
            captured: None,
        }
    }

    /// A legal capture of the piece at `position`.
    #[must_use]
    pub const fn capture(position: Position) -> Self {
        Self {
            success: true,
            captured: Some(position),
        }
    }

    /// Whether this outcome is a legal capture.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Evaluate a requested move for a piece of the given kind and team.
#[must_use]
pub fn evaluate_move(
    from: Position,
    to: Position,
    kind: PieceKind,
    team: Team,
    board: &Board,
) -> MoveOutcome {
    if !from.in_bounds() || !to.in_bounds() || from == to {
        return MoveOutcome::illegal();
    }
    match kind {
        PieceKind::Man => man_move(from, to, team, board),
        PieceKind::King => king_move(from, to, team, board),
    }
}

/// A Man steps one tile diagonally forward onto an empty tile, or jumps two
/// tiles in any diagonal direction over an opponent onto an empty tile.
fn man_move(from: Position, to: Position, team: Team, board: &Board) -> MoveOutcome {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() == 1 && dy == team.forward() {
        if !board.is_occupied(to) {
            return MoveOutcome::step();
        }
        return MoveOutcome::illegal();
    }

    if dx.abs() == 2 && dy.abs() == 2 {
        let mid = from.midpoint(to);
        if !board.is_occupied(to) && board.is_occupied_by_opponent(mid, team) {
            return MoveOutcome::capture(mid);
        }
    }

    MoveOutcome::illegal()
}

/// A King slides any distance along a diagonal. An own piece anywhere on the
/// path blocks the move; exactly one opponent piece may be passed, and
/// passing one makes the move a capture of that piece. The destination must
/// be empty either way.
fn king_move(from: Position, to: Position, team: Team, board: &Board) -> MoveOutcome {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() != dy.abs() {
        return MoveOutcome::illegal();
    }

    let step_x = dx.signum();
    let step_y = dy.signum();
    let mut current = from.offset(step_x, step_y);
    let mut captured: Option<Position> = None;

    while current != to {
        if board.is_occupied(current) {
            // A second occupied tile, or any own piece, blocks the slide.
            if captured.is_some() || !board.is_occupied_by_opponent(current, team) {
                return MoveOutcome::illegal();
            }
            captured = Some(current);
        }
        current = current.offset(step_x, step_y);
    }

    if board.is_occupied(to) {
        return MoveOutcome::illegal();
    }

    match captured {
        Some(position) => MoveOutcome::capture(position),
        None => MoveOutcome::step(),
    }
}
