//! Game-over evaluation.
//!
//! Runs for the team about to move, after every applied move. A side loses
//! when it has no pieces, when none of its pieces has a legal move, or when
//! its last piece is pinned on the left or right board edge by two opponent
//! pieces (the edge trap, which can end a game before plain mobility loss
//! would).

use crate::core::{Board, Position, Team, BOARD_SIZE, DIAGONALS};
use crate::rules::evaluate_move;

/// Why a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverReason {
    /// The losing team had no pieces left.
    NoPieces,
    /// The losing team had no legal move from any piece.
    NoMoves,
    /// The losing team's last piece was trapped on a board edge.
    EdgeTrapped,
}

/// A finished game: who won and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub winner: Team,
    pub reason: OverReason,
}

impl GameOver {
    /// Human-readable result line, shown as the game's status message.
    #[must_use]
    pub fn message(&self) -> String {
        let reason = match self.reason {
            OverReason::NoPieces => "No pieces left",
            OverReason::NoMoves => "No valid moves left",
            OverReason::EdgeTrapped => "Trapped on the edge",
        };
        format!("Game Over! {} wins! ({reason})", self.winner)
    }
}

/// Evaluate whether the game is over with `to_move` about to play.
///
/// Returns `None` while the game continues.
#[must_use]
pub fn evaluate(board: &Board, to_move: Team) -> Option<GameOver> {
    if board.team_count(to_move) == 0 {
        return Some(GameOver {
            winner: to_move.opponent(),
            reason: OverReason::NoPieces,
        });
    }

    if last_piece_edge_trapped(board, to_move) {
        return Some(GameOver {
            winner: to_move.opponent(),
            reason: OverReason::EdgeTrapped,
        });
    }

    if !has_any_move(board, to_move) {
        return Some(GameOver {
            winner: to_move.opponent(),
            reason: OverReason::NoMoves,
        });
    }

    None
}

/// The edge trap: the team is down to one piece, it stands on x = 0 or
/// x = 7, and both diagonally adjacent tiles hold opponent pieces.
fn last_piece_edge_trapped(board: &Board, team: Team) -> bool {
    if board.team_count(team) != 1 {
        return false;
    }
    let Some(piece) = board.team_pieces(team).next() else {
        return false;
    };

    let x = piece.position.x;
    if x != 0 && x != BOARD_SIZE - 1 {
        return false;
    }

    let inner = if x == 0 { 1 } else { BOARD_SIZE - 2 };
    let above = Position::new(inner, piece.position.y + 1);
    let below = Position::new(inner, piece.position.y - 1);

    above.in_bounds()
        && below.in_bounds()
        && board.is_occupied_by_opponent(above, team)
        && board.is_occupied_by_opponent(below, team)
}

/// True move enumeration: scan each piece's four diagonal directions at
/// distances 1 and 2 through `evaluate_move`. The scan is complete for this
/// rule set: a legal King slide of any length implies a legal landing at
/// distance 1 or 2 on the same ray.
fn has_any_move(board: &Board, team: Team) -> bool {
    board.team_pieces(team).any(|piece| {
        DIAGONALS.iter().any(|&(dx, dy)| {
            (1..=2).any(|distance| {
                let to = piece.position.offset(dx * distance, dy * distance);
                to.in_bounds()
                    && evaluate_move(piece.position, to, piece.kind, piece.team, board).success
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_opening_is_not_over() {
        let board = Board::opening();
        assert_eq!(evaluate(&board, Team::First), None);
        assert_eq!(evaluate(&board, Team::Second), None);
    }

    #[test]
    fn test_no_pieces_loses() {
        let board = Board::from_pieces([Piece::man(Position::new(2, 2), Team::First)]);

        assert_eq!(
            evaluate(&board, Team::Second),
            Some(GameOver {
                winner: Team::First,
                reason: OverReason::NoPieces,
            })
        );
    }

    #[test]
    fn test_no_moves_loses() {
        // First's man at (0, 6): the only forward step lands on the
        // occupied (1, 7), and the jump over it would leave the board.
        let board = Board::from_pieces([
            Piece::man(Position::new(0, 6), Team::First),
            Piece::man(Position::new(1, 7), Team::Second),
            Piece::man(Position::new(2, 6), Team::Second),
        ]);

        assert_eq!(
            evaluate(&board, Team::First),
            Some(GameOver {
                winner: Team::Second,
                reason: OverReason::NoMoves,
            })
        );
    }

    #[test]
    fn test_edge_trap_beats_mobility() {
        // First's last man at (0, 3) hemmed in by opponents at (1, 2) and
        // (1, 4). A jump over (1, 2) to (2, 1) is still legal, so plain
        // mobility would keep the game alive; the edge trap ends it.
        let board = Board::from_pieces([
            Piece::man(Position::new(0, 3), Team::First),
            Piece::man(Position::new(1, 2), Team::Second),
            Piece::man(Position::new(1, 4), Team::Second),
        ]);

        assert_eq!(
            evaluate(&board, Team::First),
            Some(GameOver {
                winner: Team::Second,
                reason: OverReason::EdgeTrapped,
            })
        );
    }

    #[test]
    fn test_edge_trap_requires_last_piece() {
        let board = Board::from_pieces([
            Piece::man(Position::new(0, 3), Team::First),
            Piece::man(Position::new(4, 2), Team::First),
            Piece::man(Position::new(1, 2), Team::Second),
            Piece::man(Position::new(1, 4), Team::Second),
        ]);

        assert_eq!(evaluate(&board, Team::First), None);
    }

    #[test]
    fn test_edge_trap_requires_both_diagonals() {
        let board = Board::from_pieces([
            Piece::man(Position::new(0, 3), Team::First),
            Piece::man(Position::new(1, 4), Team::Second),
        ]);

        // Only one hemming piece: not trapped, and a forward step exists.
        assert_eq!(evaluate(&board, Team::First), None);
    }

    #[test]
    fn test_edge_trap_right_edge() {
        let board = Board::from_pieces([
            Piece::man(Position::new(7, 4), Team::Second),
            Piece::man(Position::new(6, 3), Team::First),
            Piece::man(Position::new(6, 5), Team::First),
        ]);

        assert_eq!(
            evaluate(&board, Team::Second),
            Some(GameOver {
                winner: Team::First,
                reason: OverReason::EdgeTrapped,
            })
        );
    }

    #[test]
    fn test_king_long_slide_counts_as_mobility() {
        // The king's nearest landings on the open ray are in range of the
        // bounded scan.
        let board = Board::from_pieces([
            Piece::king(Position::new(0, 0), Team::First),
            Piece::man(Position::new(5, 7), Team::Second),
        ]);

        assert_eq!(evaluate(&board, Team::First), None);
    }

    #[test]
    fn test_game_over_message() {
        let over = GameOver {
            winner: Team::Second,
            reason: OverReason::NoPieces,
        };
        assert_eq!(over.message(), "Game Over! Second wins! (No pieces left)");
    }
}
