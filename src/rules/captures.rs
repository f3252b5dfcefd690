//! Capture discovery.
//!
//! Answers two questions the state machine needs: does a given piece have a
//! capture available right now, and which pieces of a team do. The latter
//! set is the whole enforcement mechanism for the mandatory-capture rule:
//! while it is non-empty, only pieces in it may move, and only by capturing.

use smallvec::SmallVec;

use crate::core::{Board, PieceKind, Position, Team, DIAGONALS};

/// Positions of the pieces that currently have a capture available.
///
/// Small by nature: mandatory-capture sets rarely exceed a few pieces, and
/// mid-chain the set is exactly one position.
pub type CaptureSet = SmallVec<[Position; 4]>;

/// Whether the piece at `position` has at least one capture available.
#[must_use]
pub fn has_capture_from(position: Position, kind: PieceKind, team: Team, board: &Board) -> bool {
    match kind {
        PieceKind::Man => has_man_capture(position, team, board),
        PieceKind::King => has_king_capture(position, team, board),
    }
}

/// A Man captures by any of the four two-tile diagonal jumps: the landing
/// tile must be on the board and empty, with an opponent at the midpoint.
fn has_man_capture(position: Position, team: Team, board: &Board) -> bool {
    DIAGONALS.iter().any(|&(dx, dy)| {
        let landing = position.offset(2 * dx, 2 * dy);
        let mid = position.offset(dx, dy);
        landing.in_bounds()
            && !board.is_occupied(landing)
            && board.is_occupied_by_opponent(mid, team)
    })
}

/// A King captures along a ray if the first occupied tile on it holds an
/// opponent and at least one empty tile follows before the next blocker.
fn has_king_capture(position: Position, team: Team, board: &Board) -> bool {
    for &(dx, dy) in &DIAGONALS {
        let mut current = position.offset(dx, dy);
        let mut opponent_found = false;

        while current.in_bounds() {
            if board.is_occupied(current) {
                if board.is_occupied_by_opponent(current, team) && !opponent_found {
                    opponent_found = true;
                } else {
                    // Own piece, or a second piece behind the opponent.
                    break;
                }
            } else if opponent_found {
                return true;
            }
            current = current.offset(dx, dy);
        }
    }
    false
}

/// Positions of every `team` piece that has a capture available.
#[must_use]
pub fn mandatory_capture_positions(board: &Board, team: Team) -> CaptureSet {
    board
        .team_pieces(team)
        .filter(|piece| has_capture_from(piece.position, piece.kind, team, board))
        .map(|piece| piece.position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_man_capture_available() {
        let board = Board::from_pieces([
            Piece::man(Position::new(3, 1), Team::First),
            Piece::man(Position::new(4, 2), Team::Second),
        ]);

        assert!(has_capture_from(
            Position::new(3, 1),
            PieceKind::Man,
            Team::First,
            &board
        ));
        // The jumped-over piece itself has a capture back the other way
        // only if its landing tile is empty; here (2, 0) is empty.
        assert!(has_capture_from(
            Position::new(4, 2),
            PieceKind::Man,
            Team::Second,
            &board
        ));
    }

    #[test]
    fn test_man_capture_blocked_landing() {
        let board = Board::from_pieces([
            Piece::man(Position::new(3, 1), Team::First),
            Piece::man(Position::new(4, 2), Team::Second),
            Piece::man(Position::new(5, 3), Team::Second),
        ]);

        assert!(!has_capture_from(
            Position::new(3, 1),
            PieceKind::Man,
            Team::First,
            &board
        ));
    }

    #[test]
    fn test_man_capture_landing_off_board() {
        let board = Board::from_pieces([
            Piece::man(Position::new(6, 6), Team::First),
            Piece::man(Position::new(7, 7), Team::Second),
        ]);

        assert!(!has_capture_from(
            Position::new(6, 6),
            PieceKind::Man,
            Team::First,
            &board
        ));
    }

    #[test]
    fn test_king_capture_along_ray() {
        let board = Board::from_pieces([
            Piece::king(Position::new(0, 0), Team::First),
            Piece::man(Position::new(4, 4), Team::Second),
        ]);

        assert!(has_capture_from(
            Position::new(0, 0),
            PieceKind::King,
            Team::First,
            &board
        ));
    }

    #[test]
    fn test_king_capture_blocked_by_second_piece() {
        let board = Board::from_pieces([
            Piece::king(Position::new(0, 0), Team::First),
            Piece::man(Position::new(4, 4), Team::Second),
            Piece::man(Position::new(5, 5), Team::First),
        ]);

        assert!(!has_capture_from(
            Position::new(0, 0),
            PieceKind::King,
            Team::First,
            &board
        ));
    }

    #[test]
    fn test_king_capture_blocked_by_own_piece_before_opponent() {
        let board = Board::from_pieces([
            Piece::king(Position::new(0, 0), Team::First),
            Piece::man(Position::new(2, 2), Team::First),
            Piece::man(Position::new(4, 4), Team::Second),
        ]);

        assert!(!has_capture_from(
            Position::new(0, 0),
            PieceKind::King,
            Team::First,
            &board
        ));
    }

    #[test]
    fn test_king_capture_at_board_edge() {
        // Opponent on the last tile of the ray: no landing tile beyond.
        let board = Board::from_pieces([
            Piece::king(Position::new(5, 5), Team::First),
            Piece::man(Position::new(7, 7), Team::Second),
        ]);

        assert!(!has_capture_from(
            Position::new(5, 5),
            PieceKind::King,
            Team::First,
            &board
        ));
    }

    #[test]
    fn test_mandatory_capture_positions() {
        let board = Board::from_pieces([
            Piece::man(Position::new(3, 1), Team::First),
            Piece::man(Position::new(0, 2), Team::First),
            Piece::man(Position::new(4, 2), Team::Second),
        ]);

        let set = mandatory_capture_positions(&board, Team::First);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Position::new(3, 1)));

        // The opening position has no captures for either side.
        let opening = Board::opening();
        assert!(mandatory_capture_positions(&opening, Team::First).is_empty());
        assert!(mandatory_capture_positions(&opening, Team::Second).is_empty());
    }
}
