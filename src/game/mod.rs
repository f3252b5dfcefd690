//! Game state machine: turn order, mandatory captures, multi-capture
//! chains, promotion, and game-over detection.

pub mod over;
pub mod state;
pub mod view;

pub use over::{GameOver, OverReason};
pub use state::{GameState, MoveError, STATUS_RUNNING};
pub use view::TileView;
