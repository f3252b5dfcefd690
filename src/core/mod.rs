//! Board model: positions, teams, pieces, and the board itself.
//!
//! These are the value types everything else is built on. They carry no
//! game policy; legality lives in `rules` and turn order in `game`.

pub mod board;
pub mod piece;
pub mod position;

pub use board::Board;
pub use piece::{Piece, PieceKind, Team};
pub use position::{Position, BOARD_SIZE, DIAGONALS};
