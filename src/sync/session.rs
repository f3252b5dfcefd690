//! A live room between two named peers.
//!
//! The transport (connection lifecycle, delivery, liveness) is external;
//! this module sees it only as the [`PeerChannel`] trait: a reliable,
//! ordered point-to-point pipe addressed by peer name. `Session` ties the
//! local `GameState` to one opponent: local moves go out as snapshots,
//! inbound envelopes are filtered by sender and dispatched.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Position, Team};
use crate::game::{GameState, MoveError};
use crate::rules::MoveOutcome;

use super::snapshot::{publish, reconcile, StateSnapshot};

/// A message delivered within a room, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoomMessage {
    /// Full authoritative state after a move.
    Snapshot(StateSnapshot),
    /// Request/confirmation to start over from the opening position.
    Restart,
    /// The sender is leaving; the receiver wins by forfeit.
    CloseRoom,
}

/// An inbound message with its sender's peer name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub from: String,
    pub message: RoomMessage,
}

/// Synchronization failures. None of them mutate local state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    /// The sender is not the active room's opponent; the message is dropped.
    PeerMismatch { expected: String, found: String },
    /// The payload could not be (de)serialized.
    Codec(String),
    /// The transport refused the send.
    Send(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolError::PeerMismatch { expected, found } => {
                write!(f, "Message from '{found}', expected '{expected}'")
            }
            ProtocolError::Codec(detail) => write!(f, "Snapshot codec failure: {detail}"),
            ProtocolError::Send(detail) => write!(f, "Channel send failure: {detail}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// The outbound half of the external message channel.
///
/// Implementations wrap whatever realtime transport the application uses.
pub trait PeerChannel {
    /// Deliver `message` to the peer named `to`.
    fn send(&mut self, to: &str, message: &RoomMessage) -> Result<(), ProtocolError>;
}

/// One peer's view of a two-player room.
#[derive(Debug)]
pub struct Session {
    local_peer: String,
    remote_peer: String,
    team: Team,
    state: GameState,
}

impl Session {
    /// Open a session. The room requester plays `First` and starts.
    #[must_use]
    pub fn new(local_peer: impl Into<String>, remote_peer: impl Into<String>, team: Team) -> Self {
        Self {
            local_peer: local_peer.into(),
            remote_peer: remote_peer.into(),
            team,
            state: GameState::new(),
        }
    }

    /// The local team assignment.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    /// The local peer's name.
    #[must_use]
    pub fn local_peer(&self) -> &str {
        &self.local_peer
    }

    /// The opponent's name.
    #[must_use]
    pub fn remote_peer(&self) -> &str {
        &self.remote_peer
    }

    /// Read access to the game state (for rendering).
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Attempt a local move and, if it applies, push the resulting
    /// snapshot to the opponent.
    ///
    /// A rejected move sends nothing and changes nothing; the UI uses the
    /// error to snap the dragged piece back.
    pub fn play(
        &mut self,
        from: Position,
        to: Position,
        channel: &mut dyn PeerChannel,
    ) -> Result<MoveOutcome, SessionError> {
        let outcome = self.state.attempt_move(self.team, from, to)?;

        let snapshot = publish(&self.state, Some((from, to)));
        channel.send(&self.remote_peer, &RoomMessage::Snapshot(snapshot))?;
        Ok(outcome)
    }

    /// Handle one inbound envelope from the message channel.
    ///
    /// Envelopes from anyone but the session's opponent are dropped with an
    /// error and no state change.
    pub fn receive(&mut self, envelope: &Envelope) -> Result<(), ProtocolError> {
        if envelope.from != self.remote_peer {
            warn!(
                "dropping message from unexpected peer '{}' (room opponent is '{}')",
                envelope.from, self.remote_peer
            );
            return Err(ProtocolError::PeerMismatch {
                expected: self.remote_peer.clone(),
                found: envelope.from.clone(),
            });
        }

        match &envelope.message {
            RoomMessage::Snapshot(snapshot) => {
                debug!("applying snapshot from '{}'", envelope.from);
                reconcile(&mut self.state, snapshot);
            }
            RoomMessage::Restart => {
                debug!("opponent '{}' requested restart", envelope.from);
                self.state.reset();
            }
            RoomMessage::CloseRoom => {
                debug!("opponent '{}' left the room", envelope.from);
                self.state.forfeit(self.team);
            }
        }
        Ok(())
    }

    /// Reset locally and ask the opponent to do the same.
    pub fn request_restart(&mut self, channel: &mut dyn PeerChannel) -> Result<(), ProtocolError> {
        self.state.reset();
        channel.send(&self.remote_peer, &RoomMessage::Restart)
    }

    /// Leave the room, forfeiting to the opponent.
    pub fn close_room(&mut self, channel: &mut dyn PeerChannel) -> Result<(), ProtocolError> {
        self.state.forfeit(self.team.opponent());
        channel.send(&self.remote_peer, &RoomMessage::CloseRoom)
    }
}

/// Failure of a local `play` call: either the move was rejected or the
/// snapshot could not be delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    Move(MoveError),
    Protocol(ProtocolError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl From<ProtocolError> for SessionError {
    fn from(err: ProtocolError) -> Self {
        SessionError::Protocol(err)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Move(err) => err.fmt(f),
            SessionError::Protocol(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SessionError {}
