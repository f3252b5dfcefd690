//! Movement rules and capture discovery.
//!
//! `movement` decides whether one requested move is legal; `captures`
//! finds which pieces can capture at all. Both are pure functions of the
//! board; the state machine in `game` layers turn order and the
//! mandatory-capture policy on top.

pub mod captures;
pub mod movement;

pub use captures::{has_capture_from, mandatory_capture_positions, CaptureSet};
pub use movement::{evaluate_move, MoveOutcome};
