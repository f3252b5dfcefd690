//! # checkers-core
//!
//! Rules engine and state synchronization for a live two-player checkers
//! game. Two independently-running clients each own a full copy of the
//! game state; this crate keeps them converged on one authoritative board.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: move legality and capture discovery are side-effect
//!    free functions of the board. The state machine layers turn order and
//!    the mandatory-capture policy on top.
//!
//! 2. **One mutation point**: `GameState::attempt_move` mutates only after
//!    full validation. A rejected move is a no-op reported as an error,
//!    never a panic.
//!
//! 3. **Whole-state sync**: after every applied move the entire state is
//!    serialized and sent to the opponent, who replaces their copy
//!    wholesale. Turn-gated single-writer semantics make this
//!    last-writer-wins by construction: no merging, no timestamps.
//!
//! ## Modules
//!
//! - `core`: positions, teams, pieces, the board
//! - `rules`: per-piece move legality and capture discovery
//! - `game`: the turn/game-over state machine and the UI projection
//! - `sync`: snapshot wire format and the per-room session
//! - `replay`: persisted move log and deterministic regeneration

pub mod core;
pub mod game;
pub mod replay;
pub mod rules;
pub mod sync;

// Re-export commonly used types
pub use crate::core::{Board, Piece, PieceKind, Position, Team, BOARD_SIZE, DIAGONALS};

pub use crate::rules::{
    evaluate_move, has_capture_from, mandatory_capture_positions, CaptureSet, MoveOutcome,
};

pub use crate::game::{GameOver, GameState, MoveError, OverReason, TileView, STATUS_RUNNING};

pub use crate::sync::{
    publish, reconcile, Envelope, PeerChannel, ProtocolError, RoomMessage, Session, SessionError,
    StateSnapshot,
};

pub use crate::replay::{replay_moves, MoveRecord, ReplayFrame};
