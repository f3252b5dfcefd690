//! Peer synchronization: full-state snapshots over an external channel.
//!
//! One writer at a time (the peer whose turn it is), whole state on every
//! change, wholesale replacement on receive. See `snapshot` for the wire
//! payload and `session` for the per-room plumbing.

pub mod session;
pub mod snapshot;

pub use session::{Envelope, PeerChannel, ProtocolError, RoomMessage, Session, SessionError};
pub use snapshot::{publish, reconcile, StateSnapshot};
